extern crate nanobots_and_immunity as aoc;
#[macro_use]
extern crate failure;

use clap::{Parser, ValueEnum};
use failure::Error;
use itertools::Itertools;
use std::cmp::{min, Reverse};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info, trace};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
enum Army {
    ImmuneSystem,
    Infection,
}

impl Army {
    fn name(self) -> &'static str {
        match self {
            Army::ImmuneSystem => "Immune System",
            Army::Infection => "Infection",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Group {
    army: Army,
    /// This group's position within its army, counting from 1. Only used for
    /// logging.
    id: usize,
    units: usize,
    hp_per_unit: usize,
    immunities: HashSet<String>,
    weaknesses: HashSet<String>,
    damage_type: String,
    damage: usize,
    initiative: usize,
}

impl Group {
    /// Saturates rather than overflowing, for the boost search's sake.
    fn effective_power(&self) -> usize {
        self.units.saturating_mul(self.damage)
    }

    /// The damage this group would deal `other`, before accounting for
    /// `other`'s hit points.
    fn damage_to(&self, other: &Group) -> usize {
        if other.immunities.contains(&self.damage_type) {
            0
        } else if other.weaknesses.contains(&self.damage_type) {
            self.effective_power().saturating_mul(2)
        } else {
            self.effective_power()
        }
    }

    /// Parse a group description like:
    ///
    ///     18 units each with 729 hit points (weak to fire; immune to cold, slashing)
    ///     with an attack that does 8 radiation damage at initiative 10
    ///
    /// all on one line. The parenthesized part is optional.
    fn parse(s: &str, army: Army, id: usize) -> Result<Group, Error> {
        let s = s.trim();
        let (text, modifiers) = match (s.find('('), s.find(')')) {
            (None, None) => (s.to_string(), ""),
            (Some(open), Some(close)) if open < close => {
                (format!("{} {}", &s[..open], &s[close + 1..]), &s[open + 1..close])
            }
            _ => return Err(format_err!("unbalanced parentheses in group: {:?}", s)),
        };

        // `#` marks numbers, `*` the damage type, and `|` separates
        // acceptable spellings.
        const TEMPLATE: [&str; 18] = [
            "#", "unit|units", "each", "with", "#", "hit", "point|points", "with", "an",
            "attack", "that", "does", "#", "*", "damage", "at", "initiative", "#",
        ];
        let words = text.split_whitespace().collect::<Vec<_>>();
        if words.len() != TEMPLATE.len() {
            return Err(format_err!("wrong number of words in group: {:?}", s));
        }
        let mut numbers = vec![];
        let mut damage_type = "";
        for (&word, &expected) in words.iter().zip(TEMPLATE.iter()) {
            match expected {
                "#" => numbers.push(usize::from_str(word)?),
                "*" => damage_type = word,
                _ if expected.split('|').any(|spelling| spelling == word) => (),
                _ => return Err(format_err!("expected {:?}, found {:?} in group: {:?}", expected, word, s)),
            }
        }

        let mut immunities = HashSet::new();
        let mut weaknesses = HashSet::new();
        for clause in modifiers.split(';').map(str::trim).filter(|c| !c.is_empty()) {
            let (set, types) = if let Some(types) = clause.strip_prefix("immune to ") {
                (&mut immunities, types)
            } else if let Some(types) = clause.strip_prefix("weak to ") {
                (&mut weaknesses, types)
            } else {
                return Err(format_err!("unrecognized clause {:?} in group: {:?}", clause, s));
            };
            set.extend(types.split(',').map(|t| t.trim().to_string()));
        }

        if numbers[0] == 0 || numbers[1] == 0 {
            return Err(format_err!("group must have units with hit points: {:?}", s));
        }

        Ok(Group {
            army,
            id,
            units: numbers[0],
            hp_per_unit: numbers[1],
            immunities,
            weaknesses,
            damage_type: damage_type.to_string(),
            damage: numbers[2],
            initiative: numbers[3],
        })
    }
}

/// Parse both armies from `input`, which has an `Immune System:` section and
/// an `Infection:` section, each listing its groups one per line.
fn parse_armies(input: &str) -> Result<Vec<Group>, Error> {
    let mut groups: Vec<Group> = vec![];
    let mut army = None;
    let mut next_id = 1;
    for line in input.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if line.ends_with(':') {
            army = match line {
                "Immune System:" => Some(Army::ImmuneSystem),
                "Infection:" => Some(Army::Infection),
                _ => return Err(format_err!("unrecognized army: {:?}", line)),
            };
            next_id = 1;
            continue;
        }

        let army = army.ok_or_else(|| format_err!("group listed before any army: {:?}", line))?;
        groups.push(Group::parse(line, army, next_id)?);
        next_id += 1;
    }

    for &army in &[Army::ImmuneSystem, Army::Infection] {
        if !groups.iter().any(|g| g.army == army) {
            return Err(format_err!("input has no {} groups", army.name()));
        }
    }
    Ok(groups)
}

fn total_units(groups: &[Group], army: Army) -> usize {
    groups.iter().filter(|g| g.army == army).map(|g| g.units).sum()
}

/// Each group's choice of target for one round: `targets[i]` is the index in
/// `groups` of the group that `groups[i]` will attack, if any.
fn select_targets(groups: &[Group]) -> Vec<Option<usize>> {
    let choosing_order = (0..groups.len()).sorted_by_key(|&i| {
        let group = &groups[i];
        Reverse((group.effective_power(), group.initiative))
    });

    let mut unchosen: BTreeSet<usize> = (0..groups.len()).collect();
    let mut targets = vec![None; groups.len()];
    for attacker_ix in choosing_order {
        let attacker = &groups[attacker_ix];
        let best_target = unchosen
            .iter()
            .cloned()
            .filter(|&i| groups[i].army != attacker.army && attacker.damage_to(&groups[i]) > 0)
            .max_by_key(|&i| {
                let defender = &groups[i];
                (attacker.damage_to(defender), defender.effective_power(), defender.initiative)
            });
        if let Some(defender_ix) = best_target {
            trace!(
                "{} group {} would deal defending group {} {} damage",
                attacker.army.name(),
                attacker.id,
                groups[defender_ix].id,
                attacker.damage_to(&groups[defender_ix])
            );
            unchosen.remove(&defender_ix);
            targets[attacker_ix] = Some(defender_ix);
        }
    }
    targets
}

/// Fight one round: select targets, attack, and remove groups with no units
/// left. Return the number of units killed.
fn fight(groups: &mut Vec<Group>) -> usize {
    for group in groups.iter() {
        assert!(group.units > 0, "{} group {} has no units", group.army.name(), group.id);
    }

    let targets = select_targets(groups);
    let attack_order = (0..groups.len()).sorted_by_key(|&i| Reverse(groups[i].initiative));

    let mut total_killed = 0;
    for attacker_ix in attack_order {
        let defender_ix = match targets[attacker_ix] {
            Some(defender_ix) => defender_ix,
            None => continue,
        };

        let killed;
        {
            let attacker = &groups[attacker_ix];
            if attacker.units == 0 {
                debug!(
                    "{} group {} has been defeated, and does not attack",
                    attacker.army.name(),
                    attacker.id
                );
                continue;
            }

            let defender = &groups[defender_ix];
            killed = min(defender.units, attacker.damage_to(defender) / defender.hp_per_unit);
            debug!(
                "{} group {} attacks defending group {}, killing {} units",
                attacker.army.name(),
                attacker.id,
                defender.id,
                killed
            );
        }
        groups[defender_ix].units -= killed;
        total_killed += killed;
    }

    groups.retain(|group| group.units > 0);
    total_killed
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Outcome {
    Victory { army: Army, units: usize },
    /// A round passed in which nobody died, so nobody ever will.
    Stalemate { immune_system: usize, infection: usize },
}

impl Outcome {
    /// If the immune system won, return how many units it has left.
    fn immune_system_victory(self) -> Option<usize> {
        match self {
            Outcome::Victory {
                army: Army::ImmuneSystem,
                units,
            } => Some(units),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match *self {
            Outcome::Victory { army, units } => write!(f, "{} wins with {} units left", army.name(), units),
            Outcome::Stalemate {
                immune_system,
                infection,
            } => write!(
                f,
                "stalemate with {} {} units and {} {} units left",
                immune_system,
                Army::ImmuneSystem.name(),
                infection,
                Army::Infection.name()
            ),
        }
    }
}

/// Fight a battle between the armies in `original_groups`, with the immune
/// system's damage increased by `boost`.
fn battle(original_groups: &[Group], boost: usize) -> Outcome {
    let mut groups = original_groups
        .iter()
        .cloned()
        .map(|mut group| {
            if group.army == Army::ImmuneSystem {
                group.damage = group.damage.saturating_add(boost);
            }
            group
        })
        .collect::<Vec<_>>();

    let mut rounds = 0;
    let outcome = loop {
        let immune_system = total_units(&groups, Army::ImmuneSystem);
        let infection = total_units(&groups, Army::Infection);
        if immune_system == 0 {
            break Outcome::Victory {
                army: Army::Infection,
                units: infection,
            };
        }
        if infection == 0 {
            break Outcome::Victory {
                army: Army::ImmuneSystem,
                units: immune_system,
            };
        }

        rounds += 1;
        if fight(&mut groups) == 0 {
            debug!(rounds, "stalemate");
            break Outcome::Stalemate {
                immune_system,
                infection,
            };
        }
    };

    info!(boost, rounds, %outcome, "battle over");
    outcome
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum Search {
    /// Try every boost in order, starting from zero
    Linear,
    /// Double the boost until the immune system wins, then bisect
    Bisect,
}

/// Find the smallest boost that lets the immune system win, trying each boost
/// in turn. Return the boost and the number of immune system units left, or
/// `None` if no boost up to `max_boost` wins.
fn smallest_winning_boost(groups: &[Group], max_boost: Option<usize>) -> Option<(usize, usize)> {
    (0..)
        .take_while(|&boost| max_boost.map_or(true, |max| boost <= max))
        .filter_map(|boost| battle(groups, boost).immune_system_victory().map(|units| (boost, units)))
        .next()
}

/// Like `smallest_winning_boost`, but assume that once some boost wins, every
/// greater boost does too, and search accordingly.
fn smallest_winning_boost_bisect(groups: &[Group], max_boost: Option<usize>) -> Option<(usize, usize)> {
    let wins = |boost| battle(groups, boost).immune_system_victory();

    if let Some(units) = wins(0) {
        return Some((0, units));
    }

    // `lost` always loses; find a `won` that wins.
    let mut lost = 0;
    let mut won = 1;
    let mut won_units = loop {
        if let Some(max) = max_boost {
            if lost >= max {
                return None;
            }
            won = min(won, max);
        }
        if let Some(units) = wins(won) {
            break units;
        }
        lost = won;
        won = won.checked_mul(2)?;
    };

    while won - lost > 1 {
        let boost = lost + (won - lost) / 2;
        match wins(boost) {
            Some(units) => {
                won = boost;
                won_units = units;
            }
            None => lost = boost,
        }
    }
    Some((won, won_units))
}

#[derive(Parser)]
#[command(name = "day-24")]
#[command(about = "Simulate the immune system's battle against an infection")]
struct Args {
    /// Army descriptions, under `Immune System:` and `Infection:` headings
    input: PathBuf,

    /// How to search for the smallest winning boost
    #[arg(long, value_enum, default_value_t = Search::Linear)]
    search: Search,

    /// Give up if the immune system still loses with this boost
    #[arg(long)]
    max_boost: Option<usize>,
}

fn main() -> Result<(), Error> {
    aoc::init_tracing();
    let args = Args::parse();

    let groups = parse_armies(&aoc::read_input(&args.input)?)?;
    info!(groups = groups.len(), "parsed armies");

    println!("Without a boost, {}", battle(&groups, 0));

    let found = match args.search {
        Search::Linear => smallest_winning_boost(&groups, args.max_boost),
        Search::Bisect => smallest_winning_boost_bisect(&groups, args.max_boost),
    };
    let (boost, units) = found.ok_or_else(|| match args.max_boost {
        Some(max) => format_err!("no boost up to {} lets the immune system win", max),
        None => format_err!("no boost lets the immune system win"),
    })?;
    println!(
        "Smallest winning boost: {}, leaving the immune system with {} units",
        boost, units
    );

    Ok(())
}

#[cfg(test)]
static SAMPLE: &str = include_str!("../../tests/data/day-24-sample.txt");

#[cfg(test)]
fn group_units(groups: &[Group]) -> Vec<(Army, usize, usize)> {
    groups.iter().map(|g| (g.army, g.id, g.units)).collect()
}

#[cfg(test)]
fn set(types: &[&str]) -> HashSet<String> {
    types.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_parse_group() -> Result<(), Error> {
    let group = Group::parse(
        "18 units each with 729 hit points (weak to fire; immune to cold, slashing) \
         with an attack that does 8 radiation damage at initiative 10",
        Army::Infection,
        3,
    )?;
    assert_eq!(
        group,
        Group {
            army: Army::Infection,
            id: 3,
            units: 18,
            hp_per_unit: 729,
            immunities: set(&["cold", "slashing"]),
            weaknesses: set(&["fire"]),
            damage_type: "radiation".to_string(),
            damage: 8,
            initiative: 10,
        }
    );

    let plain = Group::parse(
        "1 unit each with 1 hit point with an attack that does 2 cold damage at initiative 4",
        Army::ImmuneSystem,
        1,
    )?;
    assert_eq!((plain.units, plain.hp_per_unit, plain.damage, plain.initiative), (1, 1, 2, 4));
    assert!(plain.immunities.is_empty() && plain.weaknesses.is_empty());

    let immune_first = Group::parse(
        "5 units each with 10 hit points (immune to fire; weak to cold, radiation) \
         with an attack that does 3 slashing damage at initiative 1",
        Army::ImmuneSystem,
        1,
    )?;
    assert_eq!(immune_first.immunities, set(&["fire"]));
    assert_eq!(immune_first.weaknesses, set(&["cold", "radiation"]));

    for bad in &[
        "",
        "18 units each with 729 hit points",
        "18 units each with 729 hit points (weak to fire with an attack that does 8 radiation damage at initiative 10",
        "18 units each with 729 hit points (hates fire) with an attack that does 8 radiation damage at initiative 10",
        "x units each with 729 hit points with an attack that does 8 radiation damage at initiative 10",
        "18 units each with 729 hit points with an attack that does 8 radiation harm at initiative 10",
        "0 units each with 729 hit points with an attack that does 8 radiation damage at initiative 10",
    ] {
        assert!(Group::parse(bad, Army::ImmuneSystem, 1).is_err(), "parsed {:?}", bad);
    }

    Ok(())
}

#[test]
fn test_parse_armies() -> Result<(), Error> {
    let groups = parse_armies(SAMPLE)?;
    assert_eq!(
        group_units(&groups),
        vec![
            (Army::ImmuneSystem, 1, 17),
            (Army::ImmuneSystem, 2, 989),
            (Army::Infection, 1, 801),
            (Army::Infection, 2, 4485),
        ]
    );
    assert_eq!(groups[1].immunities, set(&["fire"]));
    assert_eq!(groups[1].weaknesses, set(&["bludgeoning", "slashing"]));

    assert!(parse_armies("Immune System:\n").is_err());
    assert!(parse_armies("17 units each with 5390 hit points with an attack that does 4507 fire damage at initiative 2").is_err());
    assert!(parse_armies("Bacteria:\n").is_err());
    let only_immune = SAMPLE.split("Infection:").next().unwrap();
    assert!(parse_armies(only_immune).is_err());
    Ok(())
}

#[test]
fn test_damage_to() -> Result<(), Error> {
    let attacker = Group::parse(
        "10 units each with 5 hit points with an attack that does 3 fire damage at initiative 1",
        Army::ImmuneSystem,
        1,
    )?;
    let defender = |modifiers: &str| {
        Group::parse(
            &format!(
                "1 units each with 1 hit points {} with an attack that does 1 cold damage at initiative 2",
                modifiers
            ),
            Army::Infection,
            1,
        )
        .unwrap()
    };

    assert_eq!(attacker.effective_power(), 30);
    assert_eq!(attacker.damage_to(&defender("")), 30);
    assert_eq!(attacker.damage_to(&defender("(immune to fire)")), 0);
    assert_eq!(attacker.damage_to(&defender("(weak to fire)")), 60);
    assert_eq!(attacker.damage_to(&defender("(weak to cold; immune to radiation)")), 30);
    assert_eq!(attacker.damage_to(&defender("(immune to cold, fire; weak to slashing)")), 0);
    Ok(())
}

#[test]
fn test_select_targets() -> Result<(), Error> {
    let groups = parse_armies(SAMPLE)?;
    let targets = select_targets(&groups);
    // Infection 1 -> Immune System 1, Immune System 1 -> Infection 2,
    // Infection 2 -> Immune System 2, Immune System 2 -> Infection 1.
    assert_eq!(targets, vec![Some(3), Some(2), Some(0), Some(1)]);

    let chosen = targets.iter().filter_map(|&t| t).collect::<Vec<_>>();
    let distinct = chosen.iter().collect::<HashSet<_>>();
    assert_eq!(chosen.len(), distinct.len());
    for (attacker, &target) in targets.iter().enumerate() {
        if let Some(defender) = target {
            assert_ne!(groups[attacker].army, groups[defender].army);
        }
    }
    Ok(())
}

#[test]
fn test_select_targets_skips_immune_defenders() -> Result<(), Error> {
    let groups = parse_armies(
        "Immune System:\n\
         10 units each with 10 hit points with an attack that does 5 fire damage at initiative 2\n\
         Infection:\n\
         10 units each with 10 hit points (immune to fire) with an attack that does 5 cold damage at initiative 1\n",
    )?;
    assert_eq!(select_targets(&groups), vec![None, Some(0)]);
    Ok(())
}

#[test]
fn test_select_targets_prefers_higher_initiative_defender() -> Result<(), Error> {
    // Both infection groups would take the same damage and have the same
    // effective power.
    let groups = parse_armies(
        "Immune System:\n\
         10 units each with 10 hit points with an attack that does 10 fire damage at initiative 5\n\
         Infection:\n\
         5 units each with 10 hit points with an attack that does 2 cold damage at initiative 3\n\
         5 units each with 10 hit points with an attack that does 2 cold damage at initiative 1\n",
    )?;
    assert_eq!(select_targets(&groups), vec![Some(1), Some(0), None]);
    Ok(())
}

#[test]
fn test_select_targets_higher_initiative_chooses_first() -> Result<(), Error> {
    // Two immune system groups with equal effective power want the same
    // single defender; the one with higher initiative gets it.
    let groups = parse_armies(
        "Immune System:\n\
         10 units each with 10 hit points with an attack that does 10 fire damage at initiative 2\n\
         10 units each with 10 hit points with an attack that does 10 fire damage at initiative 7\n\
         Infection:\n\
         1 units each with 1000 hit points with an attack that does 1 cold damage at initiative 1\n",
    )?;
    assert_eq!(select_targets(&groups), vec![None, Some(2), Some(1)]);
    Ok(())
}

#[test]
fn test_fight_attacks_in_initiative_order() -> Result<(), Error> {
    // Each group can wipe out the other in one attack, so whoever has the
    // higher initiative strikes first and the other never attacks.
    let slow_immune_system = "Immune System:\n\
         10 units each with 10 hit points with an attack that does 10 fire damage at initiative 1\n\
         Infection:\n\
         10 units each with 10 hit points with an attack that does 10 cold damage at initiative 2\n";
    let mut groups = parse_armies(slow_immune_system)?;
    assert_eq!(fight(&mut groups), 10);
    assert_eq!(group_units(&groups), vec![(Army::Infection, 1, 10)]);

    let fast_immune_system = "Immune System:\n\
         10 units each with 10 hit points with an attack that does 10 fire damage at initiative 2\n\
         Infection:\n\
         10 units each with 10 hit points with an attack that does 10 cold damage at initiative 1\n";
    let mut groups = parse_armies(fast_immune_system)?;
    assert_eq!(fight(&mut groups), 10);
    assert_eq!(group_units(&groups), vec![(Army::ImmuneSystem, 1, 10)]);
    Ok(())
}

#[test]
fn test_fight() -> Result<(), Error> {
    let mut groups = parse_armies(SAMPLE)?;
    assert_eq!(fight(&mut groups), 84 + 4 + 51 + 17);
    assert_eq!(
        group_units(&groups),
        vec![
            (Army::ImmuneSystem, 2, 905),
            (Army::Infection, 1, 797),
            (Army::Infection, 2, 4434),
        ]
    );
    Ok(())
}

#[test]
fn test_battle() -> Result<(), Error> {
    let groups = parse_armies(SAMPLE)?;
    let pristine = groups.clone();

    let outcome = battle(&groups, 0);
    assert_eq!(
        outcome,
        Outcome::Victory {
            army: Army::Infection,
            units: 5216
        }
    );
    assert_eq!(battle(&groups, 0), outcome);
    assert_eq!(
        battle(&groups, 1570),
        Outcome::Victory {
            army: Army::ImmuneSystem,
            units: 51
        }
    );
    assert_eq!(battle(&groups, 1569).immune_system_victory(), None);

    // Battles work on copies.
    assert_eq!(groups, pristine);
    Ok(())
}

#[test]
fn test_stalemate() -> Result<(), Error> {
    let groups = parse_armies(
        "Immune System:\n\
         3 units each with 10 hit points with an attack that does 1 fire damage at initiative 2\n\
         \n\
         Infection:\n\
         2 units each with 10 hit points with an attack that does 1 cold damage at initiative 1\n",
    )?;
    let outcome = battle(&groups, 0);
    assert_eq!(
        outcome,
        Outcome::Stalemate {
            immune_system: 3,
            infection: 2
        }
    );
    assert_eq!(outcome.immune_system_victory(), None);
    assert_eq!(
        outcome.to_string(),
        "stalemate with 3 Immune System units and 2 Infection units left"
    );

    // A boost of 2 brings the immune system's effective power to 9, still
    // short of a whole unit. At 3, it kills one unit per round.
    assert_eq!(battle(&groups, 2).immune_system_victory(), None);
    assert_eq!(battle(&groups, 3).immune_system_victory(), Some(3));
    assert_eq!(smallest_winning_boost(&groups, None), Some((3, 3)));
    Ok(())
}

#[test]
fn test_smallest_winning_boost() -> Result<(), Error> {
    let groups = parse_armies(SAMPLE)?;
    assert_eq!(smallest_winning_boost(&groups, None), Some((1570, 51)));
    assert_eq!(smallest_winning_boost_bisect(&groups, None), Some((1570, 51)));
    assert_eq!(smallest_winning_boost_bisect(&groups, Some(1570)), Some((1570, 51)));
    assert_eq!(smallest_winning_boost_bisect(&groups, Some(1569)), None);
    assert_eq!(smallest_winning_boost(&groups, Some(100)), None);
    Ok(())
}

#[test]
fn test_unwinnable() -> Result<(), Error> {
    let groups = parse_armies(
        "Immune System:\n\
         1 units each with 10 hit points with an attack that does 1 fire damage at initiative 2\n\
         Infection:\n\
         1 units each with 100 hit points (immune to fire) with an attack that does 1 cold damage at initiative 1\n",
    )?;
    assert_eq!(smallest_winning_boost(&groups, Some(20)), None);
    assert_eq!(smallest_winning_boost_bisect(&groups, Some(20)), None);
    assert_eq!(smallest_winning_boost_bisect(&groups, Some(0)), None);

    // With no limit, doubling runs out of boosts to try.
    assert_eq!(smallest_winning_boost_bisect(&groups, None), None);
    Ok(())
}

#[test]
fn test_unwinnable_with_huge_boosts() -> Result<(), Error> {
    // Boosts near the top of the range make the immune system's effective
    // power saturate rather than overflow.
    let groups = parse_armies(
        "Immune System:\n\
         1000 units each with 10 hit points (weak to cold) with an attack that does 1 fire damage at initiative 2\n\
         Infection:\n\
         1 units each with 100 hit points (immune to fire) with an attack that does 1 cold damage at initiative 1\n",
    )?;
    assert_eq!(smallest_winning_boost_bisect(&groups, None), None);
    assert_eq!(
        battle(&groups, usize::max_value()),
        Outcome::Stalemate {
            immune_system: 1000,
            infection: 1
        }
    );
    Ok(())
}

#[test]
fn test_winning_without_boost() -> Result<(), Error> {
    let groups = parse_armies(
        "Immune System:\n\
         5 units each with 10 hit points with an attack that does 10 fire damage at initiative 2\n\
         Infection:\n\
         1 units each with 10 hit points with an attack that does 1 cold damage at initiative 1\n",
    )?;
    assert_eq!(smallest_winning_boost(&groups, None), Some((0, 5)));
    assert_eq!(smallest_winning_boost_bisect(&groups, None), Some((0, 5)));
    Ok(())
}
