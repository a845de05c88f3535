//! Precondition checks shared by the generators.

use crate::error::{GeomError, Result};
use crate::vec2::Vec2;

pub(crate) fn finite(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeomError::invalid(name, format!("must be finite, got {value}")))
    }
}

pub(crate) fn non_negative(name: &'static str, value: f32) -> Result<f32> {
    let value = finite(name, value)?;
    if value < 0.0 {
        return Err(GeomError::invalid(name, format!("must be non-negative, got {value}")));
    }
    Ok(value)
}

pub(crate) fn point(name: &'static str, p: Vec2) -> Result<Vec2> {
    if p.is_finite() {
        Ok(p)
    } else {
        Err(GeomError::invalid(name, format!("must be finite, got ({}, {})", p.x, p.y)))
    }
}

pub(crate) fn count_at_least(name: &'static str, value: u32, min: u32) -> Result<u32> {
    if value < min {
        return Err(GeomError::invalid(name, format!("must be at least {min}, got {value}")));
    }
    Ok(value)
}
