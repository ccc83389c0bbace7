//! Layout editor type definitions: ResizeHandle, InteractionState, Interaction.

use crate::model::{Geometry, Point};
use std::fmt;
use std::str::FromStr;

/// Corner grabbed during a resize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeHandle {
    /// Handle by overlay index (0=TL, 1=TR, 2=BL, 3=BR).
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::TopLeft),
            1 => Some(Self::TopRight),
            2 => Some(Self::BottomLeft),
            3 => Some(Self::BottomRight),
            _ => None,
        }
    }

    /// Handle moves the left edge
    pub fn moves_left(&self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Handle moves the top edge
    pub fn moves_top(&self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopLeft => write!(f, "top-left"),
            Self::TopRight => write!(f, "top-right"),
            Self::BottomLeft => write!(f, "bottom-left"),
            Self::BottomRight => write!(f, "bottom-right"),
        }
    }
}

impl FromStr for ResizeHandle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tl" | "top-left" => Ok(Self::TopLeft),
            "tr" | "top-right" => Ok(Self::TopRight),
            "bl" | "bottom-left" => Ok(Self::BottomLeft),
            "br" | "bottom-right" => Ok(Self::BottomRight),
            _ => Err(format!("unknown resize handle '{s}'")),
        }
    }
}

/// Interaction state of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging,
    Resizing(ResizeHandle),
}

/// An open drag or resize
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Interaction {
    pub(crate) state: InteractionState,
    pub(crate) start_pointer: Point,
    pub(crate) start: Geometry,
    pub(crate) candidate: Geometry,
}

impl Interaction {
    pub(crate) fn new(state: InteractionState, pointer: Point, start: Geometry) -> Self {
        Self {
            state,
            start_pointer: pointer,
            start,
            candidate: start,
        }
    }
}
