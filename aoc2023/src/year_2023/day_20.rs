//! Day 20: Pulse Propagation

use std::collections::{HashMap, VecDeque};

use crate::utils::math::lcm_all;
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::{debug, trace};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const BROADCASTER: &str = "broadcaster";
const RX: &str = "rx";
const BUTTON_PRESSES: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    Broadcast,
    FlipFlop,
    Conjunction,
}

#[derive(Debug, Clone)]
struct Module<'a> {
    kind: Kind,
    outputs: Vec<&'a str>,
}

/// Mutable state of every module between button presses.
#[derive(Debug, Clone, Default)]
struct State<'a> {
    flip_flops: HashMap<&'a str, bool>,
    /// Last pulse (true = high) remembered per conjunction input
    memory: HashMap<&'a str, HashMap<&'a str, bool>>,
}

#[derive(Debug)]
pub struct Network<'a> {
    modules: HashMap<&'a str, Module<'a>>,
    inputs: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> Network<'a> {
    fn initial_state(&self) -> State<'a> {
        let mut state = State::default();
        for (&name, module) in &self.modules {
            match module.kind {
                Kind::FlipFlop => {
                    state.flip_flops.insert(name, false);
                }
                Kind::Conjunction => {
                    let remembered = self
                        .inputs
                        .get(name)
                        .into_iter()
                        .flatten()
                        .map(|&input| (input, false))
                        .collect();
                    state.memory.insert(name, remembered);
                }
                Kind::Broadcast => {}
            }
        }
        state
    }

    /// Press the button once, calling `on_pulse(from, to, high)` for every
    /// pulse in the order they are processed.
    fn press(&self, state: &mut State<'a>, mut on_pulse: impl FnMut(&str, &str, bool)) {
        let mut queue = VecDeque::from([("button", BROADCASTER, false)]);
        while let Some((from, to, high)) = queue.pop_front() {
            on_pulse(from, to, high);
            let Some(module) = self.modules.get(to) else {
                continue;
            };
            let send = match module.kind {
                Kind::Broadcast => Some(high),
                Kind::FlipFlop if high => None,
                Kind::FlipFlop => {
                    let on = state.flip_flops.entry(to).or_default();
                    *on = !*on;
                    Some(*on)
                }
                Kind::Conjunction => {
                    let memory = state.memory.entry(to).or_default();
                    memory.insert(from, high);
                    Some(!memory.values().all(|&h| h))
                }
            };
            if let Some(pulse) = send {
                queue.extend(module.outputs.iter().map(|&out| (to, out, pulse)));
            }
        }
    }
}

fn parse_network(input: &str) -> anyhow::Result<Network<'_>> {
    let mut modules = HashMap::new();
    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (name, outputs) = line
            .split_once(" -> ")
            .ok_or_else(|| anyhow!("expected '<module> -> <outputs>' in {line:?}"))?;
        let (kind, name) = if let Some(name) = name.strip_prefix('%') {
            (Kind::FlipFlop, name)
        } else if let Some(name) = name.strip_prefix('&') {
            (Kind::Conjunction, name)
        } else if name == BROADCASTER {
            (Kind::Broadcast, name)
        } else {
            bail!("unknown module {name:?}");
        };
        let outputs = outputs.split(',').map(str::trim).collect();
        if modules.insert(name, Module { kind, outputs }).is_some() {
            bail!("module {name:?} defined twice");
        }
    }
    if !modules.contains_key(BROADCASTER) {
        bail!("no broadcaster");
    }

    let mut inputs: HashMap<&str, Vec<&str>> = HashMap::new();
    for (&name, module) in &modules {
        for &out in &module.outputs {
            inputs.entry(out).or_default().push(name);
        }
    }
    for sources in inputs.values_mut() {
        sources.sort_unstable();
    }
    Ok(Network { modules, inputs })
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_network(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut state = shared.initial_state();
        let (mut low, mut high) = (0u64, 0u64);
        for _ in 0..BUTTON_PRESSES {
            shared.press(&mut state, |_, _, pulse| {
                if pulse {
                    high += 1;
                } else {
                    low += 1;
                }
            });
        }
        debug!(low, high, "pulses after {BUTTON_PRESSES} presses");
        Ok((low * high).to_string())
    }
}

impl PartSolver<2> for Solver {
    /// `rx` is fed by a single conjunction, which sends low only once all of
    /// its inputs are high. Each input goes high periodically, so `rx`
    /// first gets a low pulse at the LCM of those periods.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let feeder = match shared.inputs.get(RX).map(Vec::as_slice) {
            Some(&[feeder]) => feeder,
            Some(_) => {
                return Err(SolveError::NoSolution(
                    "rx has more than one input".to_string(),
                ));
            }
            None => return Err(SolveError::NoSolution("no module sends to rx".to_string())),
        };
        if shared.modules.get(feeder).map(|m| &m.kind) != Some(&Kind::Conjunction) {
            return Err(SolveError::NoSolution(format!("{feeder} is not a conjunction")));
        }
        let watched: Vec<&str> = shared.inputs.get(feeder).cloned().unwrap_or_default();

        let mut first_high: HashMap<&str, u64> = HashMap::new();
        let mut state = shared.initial_state();
        // each period is at most the number of flip-flop states per input
        let limit = 1u64 << 20;
        for presses in 1..=limit {
            shared.press(&mut state, |from, to, pulse| {
                if pulse && to == feeder {
                    if let Some(&input) = watched.iter().find(|&&w| w == from) {
                        first_high.entry(input).or_insert_with(|| {
                            trace!(input, presses, "first high pulse");
                            presses
                        });
                    }
                }
            });
            if first_high.len() == watched.len() {
                debug!(?first_high, "periods found");
                return Ok(lcm_all(first_high.into_values()).to_string());
            }
        }
        Err(SolveError::NoSolution(format!(
            "inputs of {feeder} did not all go high within {limit} presses"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SIMPLE: &str = "\
broadcaster -> a, b, c
%a -> b
%b -> c
%c -> inv
&inv -> a
";

    const INTERESTING: &str = "\
broadcaster -> a
%a -> inv, con
&inv -> b
%b -> con
&con -> output
";

    /// Flip-flop chains of length 1 and 2, each behind an inverter; the
    /// inverters first send high on presses 2 and 4.
    const COUNTERS: &str = "\
broadcaster -> a1, b1
%a1 -> ca
&ca -> hub
%b1 -> b2
%b2 -> cb
&cb -> hub
&hub -> rx
";

    #[test]
    fn part_1_samples() {
        let mut shared = Solver::parse(SIMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "32000000");
        let mut shared = Solver::parse(INTERESTING).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "11687500");
    }

    #[test]
    fn part_2_without_rx() {
        let mut shared = Solver::parse(SIMPLE).unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::NoSolution(_))
        ));
    }

    #[test]
    fn part_2_counts_periods() {
        let mut shared = Solver::parse(COUNTERS).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "4");
    }
}
