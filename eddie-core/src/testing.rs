//! Recording fakes for controller tests

use std::vec::Vec;

use eddie_display::{CharacterDisplay, DisplayError, Glyph, Rgb, ScrollDirection};
use embedded_hal_async::delay::DelayNs;

use crate::traits::{Indicator, IndicatorError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Clear,
    Home,
    Color(Rgb),
    Write(Vec<u8>),
    Scroll(ScrollDirection),
    Glyph(u8),
}

#[derive(Debug, Default)]
pub struct FakeDisplay {
    pub ops: Vec<Op>,
    pub fail_all: bool,
    pub fail_writes: bool,
    pub fail_scroll: bool,
}

impl FakeDisplay {
    fn record(&mut self, op: Op) -> Result<(), DisplayError> {
        if self.fail_all {
            return Err(DisplayError::Communication);
        }
        self.ops.push(op);
        Ok(())
    }

    pub fn scrolls(&self) -> Vec<ScrollDirection> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Scroll(direction) => Some(*direction),
                _ => None,
            })
            .collect()
    }

    pub fn last_write(&self) -> Option<&[u8]> {
        self.ops.iter().rev().find_map(|op| match op {
            Op::Write(bytes) => Some(bytes.as_slice()),
            _ => None,
        })
    }
}

impl CharacterDisplay for FakeDisplay {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.record(Op::Clear)
    }

    fn home(&mut self) -> Result<(), DisplayError> {
        self.record(Op::Home)
    }

    fn set_color(&mut self, color: Rgb) -> Result<(), DisplayError> {
        self.record(Op::Color(color))
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        if self.fail_writes {
            return Err(DisplayError::Communication);
        }
        self.record(Op::Write(bytes.to_vec()))
    }

    fn scroll(&mut self, direction: ScrollDirection) -> Result<(), DisplayError> {
        if self.fail_scroll {
            return Err(DisplayError::Communication);
        }
        self.record(Op::Scroll(direction))
    }

    fn define_glyph(&mut self, slot: u8, _glyph: &Glyph) -> Result<(), DisplayError> {
        self.record(Op::Glyph(slot))
    }
}

#[derive(Debug, Default)]
pub struct FakeIndicator {
    pub lit: bool,
    pub fail: bool,
    pub writes: usize,
}

impl FakeIndicator {
    fn set(&mut self, lit: bool) -> Result<(), IndicatorError> {
        if self.fail {
            return Err(IndicatorError::Communication);
        }
        self.lit = lit;
        self.writes += 1;
        Ok(())
    }
}

impl Indicator for FakeIndicator {
    fn on(&mut self) -> Result<(), IndicatorError> {
        self.set(true)
    }

    fn off(&mut self) -> Result<(), IndicatorError> {
        self.set(false)
    }

    fn is_on(&self) -> bool {
        self.lit
    }
}

/// Delay that returns immediately and records each request in nanoseconds
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub delays_ns: Vec<u64>,
}

impl DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.delays_ns.push(u64::from(ns));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.delays_ns.push(u64::from(ms) * 1_000_000);
    }
}
