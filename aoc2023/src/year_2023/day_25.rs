//! Day 25: Snowverload

use std::collections::{HashMap, VecDeque};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
pub struct Solver;

/// Wires to cut
const CUT: usize = 3;

#[derive(Debug)]
pub struct Wiring<'a> {
    names: Vec<&'a str>,
    links: Vec<Vec<usize>>,
}

impl<'a> Wiring<'a> {
    fn component(&mut self, ids: &mut HashMap<&'a str, usize>, name: &'a str) -> usize {
        *ids.entry(name).or_insert_with(|| {
            self.names.push(name);
            self.links.push(Vec::new());
            self.names.len() - 1
        })
    }

    /// Sizes of the two groups left after cutting exactly three wires.
    ///
    /// Unit-capacity max flow from one component to each other in turn: the
    /// first sink whose flow is exactly three sits across the cut, and the
    /// source's side is whatever the residual graph still reaches.
    pub fn split(&self) -> Option<(usize, usize)> {
        let total = self.names.len();
        (1..total).find_map(|sink| {
            let side = self.source_side(0, sink)?;
            Some((side, total - side))
        })
    }

    /// Reachable set size from `source` once the flow to `sink` is saturated,
    /// if that flow is exactly [`CUT`].
    fn source_side(&self, source: usize, sink: usize) -> Option<usize> {
        let mut flow: HashMap<(usize, usize), i8> = HashMap::new();
        let mut paths = 0;
        loop {
            let mut parent: Vec<Option<usize>> = vec![None; self.names.len()];
            parent[source] = Some(source);
            let mut reached = 1;
            let mut queue = VecDeque::from([source]);
            while let Some(u) = queue.pop_front() {
                if u == sink {
                    break;
                }
                for &v in &self.links[u] {
                    if parent[v].is_none() && flow.get(&(u, v)).copied().unwrap_or(0) < 1 {
                        parent[v] = Some(u);
                        reached += 1;
                        queue.push_back(v);
                    }
                }
            }

            if parent[sink].is_none() {
                return (paths == CUT).then_some(reached);
            }
            paths += 1;
            if paths > CUT {
                return None;
            }
            let mut v = sink;
            while let Some(u) = parent[v].filter(|&u| u != v) {
                *flow.entry((u, v)).or_default() += 1;
                *flow.entry((v, u)).or_default() -= 1;
                v = u;
            }
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Wiring<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut wiring = Wiring {
            names: Vec::new(),
            links: Vec::new(),
        };
        let mut ids = HashMap::new();
        for (i, line) in input.lines().enumerate().filter(|(_, l)| !l.trim().is_empty()) {
            let (name, others) = line
                .split_once(':')
                .ok_or_else(|| ParseError::at_line(i, "missing ':'"))?;
            let from = wiring.component(&mut ids, name.trim());
            for other in others.split_whitespace() {
                let to = wiring.component(&mut ids, other);
                wiring.links[from].push(to);
                wiring.links[to].push(from);
            }
        }
        if wiring.names.len() < 2 {
            return Err(ParseError::MissingData("need at least two components".to_string()));
        }
        Ok(wiring)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (a, b) = shared
            .split()
            .ok_or_else(|| SolveError::NoSolution(format!("no cut of {CUT} wires")))?;
        debug!(a, b, "groups");
        Ok((a * b).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
jqt: rhn xhk nvd
rsh: frs pzl lsr
xhk: hfx
cmg: qnr nvd lhk bvb
rhn: xhk bvb hfx
bvb: xhk hfx
pzl: lsr hfx nvd
qnr: nvd
ntq: jqt hfx bvb xhk
nvd: lhk
lsr: lhk
rzs: qnr cmg lsr rsh
frs: qnr lhk lsr
";

    #[test]
    fn sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "54");
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::PartNotImplemented(2))
        ));
    }

    #[test]
    fn sample_groups() {
        let wiring = Solver::parse(SAMPLE).unwrap();
        let (a, b) = wiring.split().unwrap();
        assert_eq!(a + b, 15);
        assert!((a, b) == (6, 9) || (a, b) == (9, 6));
    }

    #[test]
    fn triangle_has_no_three_wire_cut() {
        let mut shared = Solver::parse("a: b c\nb: c\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::NoSolution(_))
        ));
    }
}
