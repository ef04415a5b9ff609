#![forbid(unsafe_code)]

//! Deterministic resize sequence generator.
//!
//! Produces container width sequences for storm testing. The same seed
//! always produces the identical sequence, so a failing storm run can be
//! replayed from its seed alone.
//!
//! # Usage
//!
//! ```ignore
//! use spillrow_harness::{ResizeScript, ScriptConfig, ScriptPattern};
//!
//! let script = ResizeScript::new(
//!     ScriptConfig::default()
//!         .with_seed(42)
//!         .with_pattern(ScriptPattern::Burst { count: 50 }),
//! );
//! for event in script.events() {
//!     multiplexer.notify(container, Size::new(event.width, 24.0));
//!     frames.pump();
//! }
//! ```

/// Pattern for width sequence generation.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptPattern {
    /// Random widths within the configured bounds.
    Burst { count: usize },
    /// Linear sweep between two widths.
    Sweep {
        start_width: f64,
        end_width: f64,
        steps: usize,
    },
    /// Alternate between two widths.
    Oscillate {
        width_a: f64,
        width_b: f64,
        cycles: usize,
    },
    /// Random mix of in-bounds widths and boundary extremes.
    Mixed { count: usize },
    /// Caller-provided sequence, used verbatim.
    Custom { widths: Vec<f64> },
}

impl ScriptPattern {
    /// Pattern name for failure messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Burst { .. } => "burst",
            Self::Sweep { .. } => "sweep",
            Self::Oscillate { .. } => "oscillate",
            Self::Mixed { .. } => "mixed",
            Self::Custom { .. } => "custom",
        }
    }

    /// Number of events this pattern generates.
    pub fn event_count(&self) -> usize {
        match self {
            Self::Burst { count } => *count,
            Self::Sweep { steps, .. } => *steps,
            Self::Oscillate { cycles, .. } => cycles * 2,
            Self::Mixed { count } => *count,
            Self::Custom { widths } => widths.len(),
        }
    }
}

impl Default for ScriptPattern {
    fn default() -> Self {
        Self::Burst { count: 50 }
    }
}

/// Configuration for script generation.
#[derive(Debug, Clone)]
pub struct ScriptConfig {
    /// Seed for deterministic generation.
    pub seed: u64,
    /// Width sequence pattern.
    pub pattern: ScriptPattern,
    /// Smallest width random patterns may emit.
    pub min_width: f64,
    /// Largest width random patterns may emit.
    pub max_width: f64,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            pattern: ScriptPattern::default(),
            min_width: 40.0,
            max_width: 1600.0,
        }
    }
}

impl ScriptConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: ScriptPattern) -> Self {
        self.pattern = pattern;
        self
    }

    #[must_use]
    pub fn with_width_bounds(mut self, min_width: f64, max_width: f64) -> Self {
        self.min_width = min_width;
        self.max_width = max_width;
        self
    }
}

/// Simple LCG PRNG for deterministic generation.
#[derive(Debug, Clone)]
struct SeededRng {
    state: u64,
}

impl SeededRng {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn next_width(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        (min + self.next_f64() * (max - min)).round()
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// One step of a generated sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthEvent {
    /// Container width after this resize.
    pub width: f64,
    /// Position in the sequence.
    pub index: usize,
}

/// Generated resize sequence.
#[derive(Debug, Clone)]
pub struct ResizeScript {
    config: ScriptConfig,
    events: Vec<WidthEvent>,
}

impl ResizeScript {
    /// Generate the full sequence for `config`.
    pub fn new(config: ScriptConfig) -> Self {
        let mut rng = SeededRng::new(config.seed);
        let widths = match &config.pattern {
            ScriptPattern::Burst { count } => generate_burst(&mut rng, &config, *count),
            ScriptPattern::Sweep {
                start_width,
                end_width,
                steps,
            } => generate_sweep(*start_width, *end_width, *steps),
            ScriptPattern::Oscillate {
                width_a,
                width_b,
                cycles,
            } => generate_oscillate(*width_a, *width_b, *cycles),
            ScriptPattern::Mixed { count } => generate_mixed(&mut rng, &config, *count),
            ScriptPattern::Custom { widths } => widths.clone(),
        };
        let events = widths
            .into_iter()
            .enumerate()
            .map(|(index, width)| WidthEvent { width, index })
            .collect();
        Self { config, events }
    }

    pub fn config(&self) -> &ScriptConfig {
        &self.config
    }

    pub fn events(&self) -> &[WidthEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Just the widths, in sequence order.
    pub fn widths(&self) -> impl Iterator<Item = f64> + '_ {
        self.events.iter().map(|event| event.width)
    }
}

fn generate_burst(rng: &mut SeededRng, config: &ScriptConfig, count: usize) -> Vec<f64> {
    (0..count)
        .map(|_| rng.next_width(config.min_width, config.max_width))
        .collect()
}

fn generate_sweep(start_width: f64, end_width: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![end_width],
        _ => (0..steps)
            .map(|i| {
                let t = i as f64 / (steps - 1) as f64;
                (start_width + (end_width - start_width) * t).round()
            })
            .collect(),
    }
}

fn generate_oscillate(width_a: f64, width_b: f64, cycles: usize) -> Vec<f64> {
    let mut widths = Vec::with_capacity(cycles * 2);
    for _ in 0..cycles {
        widths.push(width_a);
        widths.push(width_b);
    }
    widths
}

fn generate_mixed(rng: &mut SeededRng, config: &ScriptConfig, count: usize) -> Vec<f64> {
    (0..count)
        .map(|_| {
            if rng.chance(0.15) {
                // Boundary extremes, zero included: collapsed containers
                // are where fit logic has historically been fragile.
                if rng.chance(0.5) { 0.0 } else { config.max_width }
            } else {
                rng.next_width(config.min_width, config.max_width)
            }
        })
        .collect()
}
