//! Day 7: Camel Cards

use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use itertools::Itertools;
use tracing::trace;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const CARD_ORDER: &[u8; 13] = b"23456789TJQKA";
const JOKER_ORDER: &[u8; 13] = b"J23456789TQKA";

/// Hand types, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    /// Classify by card counts; with `jokers`, every `J` joins the largest
    /// group of other cards.
    fn of(cards: &[u8; 5], jokers: bool) -> HandType {
        let joker_count = if jokers {
            cards.iter().filter(|&&c| c == b'J').count()
        } else {
            0
        };
        let mut counts: Vec<usize> = cards
            .iter()
            .filter(|&&c| !(jokers && c == b'J'))
            .counts()
            .into_values()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect();
        match counts.first_mut() {
            Some(largest) => *largest += joker_count,
            None => counts.push(joker_count),
        }

        match counts[..] {
            [5] => HandType::FiveOfAKind,
            [4, ..] => HandType::FourOfAKind,
            [3, 2] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Hand {
    cards: [u8; 5],
    bid: u64,
}

impl Hand {
    fn strength(&self, jokers: bool) -> (HandType, [usize; 5]) {
        let order = if jokers { JOKER_ORDER } else { CARD_ORDER };
        let ranks = self
            .cards
            .map(|c| order.iter().position(|&o| o == c).unwrap_or(0));
        (HandType::of(&self.cards, jokers), ranks)
    }
}

fn parse_hand(line: &str) -> anyhow::Result<Hand> {
    let (cards, bid) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected '<cards> <bid>'"))?;
    let cards: [u8; 5] = cards
        .as_bytes()
        .try_into()
        .map_err(|_| anyhow!("a hand has five cards, got {cards:?}"))?;
    if let Some(bad) = cards.iter().find(|c| !CARD_ORDER.contains(c)) {
        bail!("unknown card {:?}", *bad as char);
    }
    let bid = bid.trim().parse().context("bid")?;
    Ok(Hand { cards, bid })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hand>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                parse_hand(line).map_err(|e| ParseError::at_line(i, format!("{e:#}")))
            })
            .collect()
    }
}

fn total_winnings(hands: &[Hand], jokers: bool) -> u64 {
    hands
        .iter()
        .map(|hand| (hand.strength(jokers), hand.bid))
        .sorted_unstable()
        .enumerate()
        .map(|(rank, (strength, bid))| {
            trace!(rank = rank + 1, ?strength, bid, "ranked hand");
            (rank as u64 + 1) * bid
        })
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, true).to_string())
    }
}
