//! A point travelling along a sine wave, with a marker at the end of the
//! curve that pulses whenever the point reaches it.
//!
//! [`clock::AnimationClock`] holds the whole simulation and can be driven by
//! hand. [`driver::AnimationDriver`] runs it in real time for
//! [`ui::WaveUI`], which draws it with egui.

pub mod clock;
pub mod config;
pub mod driver;
pub mod pulse;
pub mod scale;
pub mod timer;
pub mod ui;
pub mod wave;
