//! Per-cycle driver for one statistics window

use tracing::{debug, trace};

use super::config::EngineConfig;
use super::signal::SignalDescriptor;
use crate::kind::NumericKind;
use crate::statistics::window_for_kind;
use crate::traits::{Aggregate, ConfigError, CycleError, SequenceError, WindowedStatistic};

#[cfg(feature = "std")]
use std::boxed::Box;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

/// Most output signals an engine writes, one per entry of
/// [`Aggregate::OUTPUT_ORDER`]
pub const MAX_OUTPUTS: usize = Aggregate::OUTPUT_ORDER.len();

/// State that only exists after a successful setup
#[derive(Debug)]
struct Wired {
    kind: NumericKind,
    outputs: usize,
    window: Box<dyn WindowedStatistic>,
}

/// Drives one statistics window from host signal memory
///
/// The host calls [`setup`](Self::setup) once with its signal declarations,
/// [`execute`](Self::execute) once per control cycle, and
/// [`reset`](Self::reset) on every state transition.
///
/// Each cycle one sample is read from the input location and pushed into the
/// window, then the aggregates of [`Aggregate::OUTPUT_ORDER`] are written to
/// however many outputs were declared: average, then standard deviation,
/// then minimum, then maximum.
///
/// # Example
///
/// ```
/// use windowstats::engine::{EngineConfig, SignalDescriptor, StatisticsEngine};
///
/// let mut engine = StatisticsEngine::new(EngineConfig::new().with_window_size(4));
/// engine
///     .setup(
///         &[SignalDescriptor::scalar("Current", "float64")],
///         &[
///             SignalDescriptor::scalar("CurrentAvg", "float64"),
///             SignalDescriptor::scalar("CurrentStd", "float64"),
///         ],
///     )
///     .unwrap();
///
/// let mut avg = [0u8; 8];
/// let mut std = [0u8; 8];
/// for sample in [0.0f64, 1.0, 4.0, 9.0] {
///     engine
///         .execute(&sample.to_ne_bytes(), &mut [&mut avg, &mut std])
///         .unwrap();
/// }
///
/// assert_eq!(f64::from_ne_bytes(avg), 3.5);
/// assert_eq!(f64::from_ne_bytes(std), 3.5);
/// ```
#[derive(Debug)]
pub struct StatisticsEngine {
    config: EngineConfig,
    /// Warm-up cycles elapsed, stops at `config.start_cycle`
    cycle_counter: u32,
    wired: Option<Wired>,
}

impl StatisticsEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            cycle_counter: 0,
            wired: None,
        }
    }

    /// Validate the host signals and create the statistics window
    ///
    /// The first input is the sample source. Every output must be a scalar of
    /// the same kind. On error the engine is left unconfigured.
    pub fn setup(
        &mut self,
        inputs: &[SignalDescriptor],
        outputs: &[SignalDescriptor],
    ) -> Result<(), ConfigError> {
        self.wired = None;
        self.config.validate()?;

        let input = inputs.first().ok_or(ConfigError::NoInputs)?;
        if outputs.is_empty() {
            return Err(ConfigError::NoOutputs);
        }
        if outputs.len() > MAX_OUTPUTS {
            return Err(ConfigError::TooManyOutputs {
                found: outputs.len(),
                max: MAX_OUTPUTS,
            });
        }

        let kind = input.scalar_kind()?;
        for output in outputs {
            let found = output.scalar_kind()?;
            if found != kind {
                return Err(ConfigError::TypeMismatch {
                    signal: output.name.clone(),
                    expected: kind,
                    found,
                });
            }
        }

        if inputs.len() > 1 {
            debug!(
                ignored = inputs.len() - 1,
                source = %input.name,
                "only the first input signal is sampled"
            );
        }

        let window = window_for_kind(kind, self.config.window_size)?;
        debug!(
            %kind,
            requested = self.config.window_size,
            capacity = window.capacity(),
            outputs = outputs.len(),
            start_cycle = self.config.start_cycle,
            infinite_extrema = self.config.infinite_extrema,
            "statistics engine configured"
        );

        self.wired = Some(Wired {
            kind,
            outputs: outputs.len(),
            window,
        });
        Ok(())
    }

    /// Run one control cycle
    ///
    /// `input` holds one sample in native byte order; `outputs` holds at
    /// least as many locations as were declared at setup. During the warm-up
    /// delay nothing is pushed and no output is touched. On error the window
    /// and outputs are left unchanged.
    pub fn execute(&mut self, input: &[u8], outputs: &mut [&mut [u8]]) -> Result<(), CycleError> {
        let wired = self.wired.as_mut().ok_or(CycleError::NotConfigured)?;
        let width = wired.kind.byte_width();

        if input.len() < width {
            return Err(CycleError::InputTooShort {
                expected: width,
                found: input.len(),
            });
        }

        if self.cycle_counter < self.config.start_cycle {
            self.cycle_counter += 1;
            if self.cycle_counter == self.config.start_cycle {
                trace!(cycles = self.cycle_counter, "warm-up delay elapsed");
            }
            return Ok(());
        }

        if outputs.len() < wired.outputs {
            return Err(CycleError::MissingOutput {
                slot: outputs.len(),
            });
        }
        for (slot, output) in outputs.iter().take(wired.outputs).enumerate() {
            if output.len() < width {
                return Err(CycleError::OutputTooShort {
                    slot,
                    expected: width,
                    found: output.len(),
                });
            }
        }

        wired.window.push_bytes(input, self.config.infinite_extrema)?;

        for (slot, (&aggregate, output)) in Aggregate::OUTPUT_ORDER
            .iter()
            .zip(outputs.iter_mut())
            .take(wired.outputs)
            .enumerate()
        {
            wired.window.write_aggregate(aggregate, slot, output)?;
        }

        Ok(())
    }

    /// Clear the window on a state transition
    ///
    /// The warm-up counter is not rewound: the start delay applies once per
    /// engine, not once per state.
    pub fn reset(&mut self) -> Result<(), SequenceError> {
        let wired = self
            .wired
            .as_mut()
            .ok_or(SequenceError::ResetBeforeSetup)?;
        wired.window.reset();
        debug!(kind = %wired.kind, "statistics window reset");
        Ok(())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_configured(&self) -> bool {
        self.wired.is_some()
    }

    /// Numeric kind resolved at setup
    pub fn kind(&self) -> Option<NumericKind> {
        self.wired.as_ref().map(|w| w.kind)
    }

    /// Effective window size
    pub fn capacity(&self) -> Option<u32> {
        self.wired.as_ref().map(|w| w.window.capacity())
    }

    /// Number of outputs written each cycle
    pub fn output_count(&self) -> usize {
        self.wired.as_ref().map_or(0, |w| w.outputs)
    }

    pub fn cycle_counter(&self) -> u32 {
        self.cycle_counter
    }

    /// Check if the start delay is still running
    pub fn in_warm_up(&self) -> bool {
        self.cycle_counter < self.config.start_cycle
    }

    /// Samples currently accounted for by the window
    pub fn sample_count(&self) -> u32 {
        self.wired.as_ref().map_or(0, |w| w.window.sample_count())
    }

    /// Current value of `aggregate`, widened to `f64`
    pub fn aggregate(&self, aggregate: Aggregate) -> Option<f64> {
        self.wired
            .as_ref()
            .map(|w| w.window.aggregate_f64(aggregate))
    }
}
