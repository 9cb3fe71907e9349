extern crate nanobots_and_immunity as aoc;
#[macro_use]
extern crate failure;

use aoc::best_first::best_first;
use aoc::{Manhattan, Point};
use clap::Parser;
use failure::Error;
use itertools::iproduct;
use std::cmp::Reverse;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, trace};

/// Nanobot coordinates and radii must be no larger than this, so that the
/// search's cube arithmetic stays well within `i64`.
const MAX_MAGNITUDE: i64 = 1 << 56;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Nanobot {
    pos: Point,
    radius: i64,
}

/// Return all the integers in `s`, ignoring any other text.
fn integers(s: &str) -> Result<Vec<i64>, Error> {
    let mut numbers = Vec::new();
    let mut rest = s;
    while let Some(start) = rest.find(|ch: char| ch == '-' || ch.is_ascii_digit()) {
        let tail = &rest[start..];
        let len = tail
            .char_indices()
            .skip(1)
            .find(|&(_, ch)| !ch.is_ascii_digit())
            .map_or(tail.len(), |(i, _)| i);
        rest = &tail[len..];
        if &tail[..len] == "-" {
            continue;
        }
        numbers.push(i64::from_str(&tail[..len])?);
    }
    Ok(numbers)
}

impl FromStr for Nanobot {
    type Err = Error;
    fn from_str(s: &str) -> Result<Nanobot, Error> {
        let numbers = integers(s)?;
        if numbers.len() != 4 {
            return Err(format_err!("expected x, y, z and radius in nanobot: {:?}", s));
        }
        if numbers[3] < 0 {
            return Err(format_err!("negative radius in nanobot: {:?}", s));
        }
        if numbers.iter().any(|n| n.checked_abs().map_or(true, |n| n > MAX_MAGNITUDE)) {
            return Err(format_err!("nanobot too far from the origin: {:?}", s));
        }
        Ok(Nanobot {
            pos: (numbers[0], numbers[1], numbers[2]),
            radius: numbers[3],
        })
    }
}

fn parse_nanobots(input: &str) -> Result<Vec<Nanobot>, Error> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Nanobot::from_str)
        .collect()
}

/// Return the number of nanobots in range of the one with the largest radius,
/// or `None` if there are no nanobots at all.
fn in_range_of_strongest(bots: &[Nanobot]) -> Option<usize> {
    // `min_by_key` keeps the first of equals, where `max_by_key` keeps the last.
    let strongest = bots.iter().min_by_key(|bot| Reverse(bot.radius))?;
    Some(
        bots.iter()
            .filter(|bot| strongest.pos.manhattan(bot.pos) <= strongest.radius)
            .count(),
    )
}

/// An axis-aligned box of integer points. On every axis, `min` is inclusive
/// and `max` is exclusive, so a `Cuboid` of size 1 holds the single point
/// `min`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Cuboid {
    min: Point,
    max: Point,
}

impl Cuboid {
    fn cube(min: Point, size: i64) -> Cuboid {
        Cuboid {
            min,
            max: (min.0 + size, min.1 + size, min.2 + size),
        }
    }

    /// Return a cube centered on the origin that holds every point in range
    /// of any of `bots`. Its sides are a power of two, so it can be split in
    /// half all the way down to single points.
    fn enclosing(bots: &[Nanobot]) -> Cuboid {
        let reach = bots
            .iter()
            .map(|bot| {
                let (x, y, z) = bot.pos;
                x.abs().max(y.abs()).max(z.abs()) + bot.radius
            })
            .max()
            .unwrap_or(0);

        let mut half = 1;
        while half <= reach {
            half *= 2;
        }

        Cuboid::cube((-half, -half, -half), 2 * half)
    }

    /// The length of this cube's sides. Meaningless for non-cubes.
    fn size(&self) -> i64 {
        self.max.0 - self.min.0
    }

    /// Split this cube into eight cubes of half the size.
    fn octants(&self) -> impl Iterator<Item = Cuboid> {
        let half = self.size() / 2;
        let min = self.min;
        iproduct!(0..2, 0..2, 0..2)
            .map(move |(i, j, k)| Cuboid::cube((min.0 + i * half, min.1 + j * half, min.2 + k * half), half))
    }

    /// Return true if some point in this cuboid is in range of `bot`.
    fn in_range_of(&self, bot: &Nanobot) -> bool {
        // Along each axis, `|c - low| + |c - high|` is `high - low` when `c`
        // lies between them, and exceeds that by twice `c`'s distance from the
        // nearer bound otherwise.
        fn axis(c: i64, low: i64, high: i64) -> i64 {
            (c - low).abs() + (c - high).abs() - (high - low)
        }

        let doubled = axis(bot.pos.0, self.min.0, self.max.0 - 1)
            + axis(bot.pos.1, self.min.1, self.max.1 - 1)
            + axis(bot.pos.2, self.min.2, self.max.2 - 1);
        doubled / 2 <= bot.radius
    }

    /// Return the number of `bots` with some point of this cuboid in range.
    fn coverage(&self, bots: &[Nanobot]) -> usize {
        bots.iter().filter(|bot| self.in_range_of(bot)).count()
    }
}

/// The order in which to explore cubes: the least `Priority` goes first.
///
/// Explore cubes in range of the most bots first; among those, the largest
/// first; and among those, the ones whose minimum corner is nearest the
/// origin. Splitting a cube never increases coverage, so the first cube of
/// size 1 explored is a point in range of the most bots there are, and no
/// other point in range of that many is closer to the origin.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
struct Priority {
    coverage: Reverse<usize>,
    size: Reverse<i64>,
    distance: i64,
    // Only here to make the exploration order total.
    corner: Point,
}

impl Priority {
    fn new(cube: &Cuboid, coverage: usize) -> Priority {
        Priority {
            coverage: Reverse(coverage),
            size: Reverse(cube.size()),
            distance: cube.min.manhattan((0, 0, 0)),
            corner: cube.min,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Found {
    point: Point,
    distance: i64,
    coverage: usize,
}

/// Find the point in range of the most nanobots, closest to the origin.
/// Return `None` if there are no nanobots.
fn most_covered_point(bots: &[Nanobot]) -> Option<Found> {
    if bots.is_empty() {
        return None;
    }

    let start = Cuboid::enclosing(bots);
    let start_priority = Priority::new(&start, start.coverage(bots));
    let mut explored = 0usize;
    let found = best_first(start, start_priority, |cube: &Cuboid| -> Vec<(Cuboid, Priority)> {
        if cube.size() == 1 {
            return vec![];
        }
        cube.octants()
            .map(|octant| (octant, Priority::new(&octant, octant.coverage(bots))))
            .collect()
    })
    .inspect(|prospect| {
        explored += 1;
        trace!(cube = ?prospect.node, priority = ?prospect.priority, "exploring");
    })
    .find(|prospect| prospect.node.size() == 1)?;

    info!(explored, "found most covered point");
    Some(Found {
        point: found.node.min,
        distance: found.priority.distance,
        coverage: found.priority.coverage.0,
    })
}

#[derive(Parser)]
#[command(name = "day-23")]
#[command(about = "Find the point in range of the most nanobots")]
struct Args {
    /// Nanobot list, one `pos=<x,y,z>, r=radius` per line
    #[arg(default_value = "day-23.input")]
    input: PathBuf,
}

fn main() -> Result<(), Error> {
    aoc::init_tracing();
    let args = Args::parse();

    let bots = parse_nanobots(&aoc::read_input(&args.input)?)?;
    info!(count = bots.len(), "parsed nanobots");

    let in_range = in_range_of_strongest(&bots).ok_or_else(|| format_err!("no nanobots in input"))?;
    println!("Nanobots in range of the strongest: {}", in_range);

    let found = most_covered_point(&bots).ok_or_else(|| format_err!("no nanobots in input"))?;
    println!(
        "Closest point in range of the most nanobots: {:?}, distance {}, in range of {} nanobots",
        found.point, found.distance, found.coverage
    );

    Ok(())
}

#[cfg(test)]
fn bots(list: &[(i64, i64, i64, i64)]) -> Vec<Nanobot> {
    list.iter()
        .map(|&(x, y, z, radius)| Nanobot { pos: (x, y, z), radius })
        .collect()
}

#[cfg(test)]
#[rustfmt::skip]
fn sample() -> Vec<Nanobot> {
    bots(&[(0, 0, 0, 4), (1, 0, 0, 1), (4, 0, 0, 3),
           (0, 2, 0, 1), (0, 5, 0, 3), (0, 0, 3, 1),
           (1, 1, 1, 1), (1, 1, 2, 1), (1, 3, 1, 1)])
}

#[cfg(test)]
#[rustfmt::skip]
fn teleport_sample() -> Vec<Nanobot> {
    bots(&[(10, 12, 12, 2), (12, 14, 12, 2), (16, 12, 12, 4),
           (14, 14, 14, 6), (50, 50, 50, 200), (10, 10, 10, 5)])
}

#[test]
fn test_parse_nanobot() {
    assert_eq!(
        "pos=<0,0,0>, r=4".parse::<Nanobot>().unwrap(),
        Nanobot {
            pos: (0, 0, 0),
            radius: 4
        }
    );
    assert_eq!(
        "pos=<-12,7,-3>, r=105".parse::<Nanobot>().unwrap(),
        Nanobot {
            pos: (-12, 7, -3),
            radius: 105
        }
    );
    assert!("pos=<1,2>, r=3".parse::<Nanobot>().is_err());
    assert!("pos=<1,2,3>, r=4, extra=5".parse::<Nanobot>().is_err());
    assert!("pos=<1,2,3>, r=-4".parse::<Nanobot>().is_err());
    assert!("".parse::<Nanobot>().is_err());

    // Too far out for the search to handle.
    assert!("pos=<4611686018427387904,0,0>, r=1".parse::<Nanobot>().is_err());
    assert!("pos=<-9223372036854775808,0,0>, r=1".parse::<Nanobot>().is_err());
    assert!("pos=<0,0,0>, r=72057594037927937".parse::<Nanobot>().is_err());
    assert!("pos=<72057594037927936,0,-72057594037927936>, r=72057594037927936"
        .parse::<Nanobot>()
        .is_ok());

    let parsed = parse_nanobots("pos=<0,0,0>, r=4\n\npos=<1,0,0>, r=1\n").unwrap();
    assert_eq!(parsed, bots(&[(0, 0, 0, 4), (1, 0, 0, 1)]));
}

#[test]
fn test_integers() {
    assert_eq!(integers("a-1b22c--3 - 4").unwrap(), vec![-1, 22, -3, 4]);
    assert_eq!(integers("nothing here").unwrap(), Vec::<i64>::new());
    assert!(integers("99999999999999999999").is_err());
}

#[test]
fn test_in_range_of_strongest() {
    assert_eq!(in_range_of_strongest(&sample()), Some(7));
    assert_eq!(in_range_of_strongest(&[]), None);

    // Ties go to the first bot listed.
    assert_eq!(in_range_of_strongest(&bots(&[(0, 0, 0, 1), (10, 0, 0, 1), (11, 0, 0, 0)])), Some(1));
    assert_eq!(in_range_of_strongest(&bots(&[(10, 0, 0, 1), (0, 0, 0, 1), (11, 0, 0, 0)])), Some(2));
}

#[test]
fn test_in_range_of_matches_brute_force() {
    let range = -2..=2;
    let nanobots = iproduct!(range.clone(), range.clone(), range.clone(), 0..=2)
        .map(|(x, y, z, radius)| Nanobot { pos: (x, y, z), radius })
        .collect::<Vec<_>>();

    for (min, extent) in iproduct!(iproduct!(-2..2, -2..2, -2..2), iproduct!(1..4, 1..4, 1..4)) {
        let cuboid = Cuboid {
            min,
            max: (min.0 + extent.0, min.1 + extent.1, min.2 + extent.2),
        };
        for bot in &nanobots {
            let brute_force = iproduct!(
                cuboid.min.0..cuboid.max.0,
                cuboid.min.1..cuboid.max.1,
                cuboid.min.2..cuboid.max.2
            )
            .any(|p| p.manhattan(bot.pos) <= bot.radius);
            assert_eq!(
                cuboid.in_range_of(bot),
                brute_force,
                "cuboid {:?}, bot {:?}",
                cuboid,
                bot
            );
        }
    }
}

#[test]
fn test_enclosing() {
    let cube = Cuboid::enclosing(&sample());
    // The farthest reach is 8, from the bot at 0,5,0 with radius 3.
    assert_eq!(cube, Cuboid::cube((-16, -16, -16), 32));
    assert_eq!(cube.coverage(&sample()), sample().len());

    assert_eq!(Cuboid::enclosing(&bots(&[(0, 0, 0, 0)])), Cuboid::cube((-1, -1, -1), 2));
    assert_eq!(Cuboid::enclosing(&bots(&[(-3, 0, 0, 0)])), Cuboid::cube((-4, -4, -4), 8));
}

#[test]
fn test_octants_partition_cube() {
    let cube = Cuboid::cube((-4, -4, -4), 8);
    let octants = cube.octants().collect::<Vec<_>>();
    assert_eq!(octants.len(), 8);
    assert!(octants.iter().all(|o| o.size() == 4));

    for p in iproduct!(-4..4, -4..4, -4..4) {
        let containing = octants.iter()
            .filter(|o| o.min.0 <= p.0 && p.0 < o.max.0 &&
                        o.min.1 <= p.1 && p.1 < o.max.1 &&
                        o.min.2 <= p.2 && p.2 < o.max.2)
            .count();
        assert_eq!(containing, 1, "point {:?}", p);
    }
}

#[test]
fn test_coverage_never_grows_when_splitting() {
    for nanobots in &[sample(), teleport_sample()] {
        let mut level = vec![Cuboid::enclosing(nanobots)];
        while level[0].size() > 2 {
            let mut next = vec![];
            for parent in &level {
                let parent_coverage = parent.coverage(nanobots);
                for octant in parent.octants() {
                    assert!(octant.coverage(nanobots) <= parent_coverage,
                            "octant {:?} of {:?}", octant, parent);
                    next.push(octant);
                }
            }
            // Keep the tree from getting too bushy.
            next.truncate(64);
            level = next;
        }
    }
}

#[test]
fn test_most_covered_point() {
    assert_eq!(
        most_covered_point(&sample()),
        Some(Found {
            point: (1, 0, 0),
            distance: 1,
            coverage: 3
        })
    );
    assert_eq!(
        most_covered_point(&teleport_sample()),
        Some(Found {
            point: (12, 12, 12),
            distance: 36,
            coverage: 5
        })
    );
    assert_eq!(most_covered_point(&[]), None);

    // A single bot far from the origin: the best point is the nearest point
    // of its range.
    assert_eq!(
        most_covered_point(&bots(&[(100, -50, 20, 30)])),
        Some(Found {
            point: (70, -50, 20),
            distance: 140,
            coverage: 1
        })
    );
}

#[test]
fn test_most_covered_point_at_largest_magnitude() {
    let far = MAX_MAGNITUDE;
    let nanobot = format!("pos=<{},0,{}>, r=0", far, -far).parse::<Nanobot>().unwrap();
    assert_eq!(
        most_covered_point(&[nanobot]),
        Some(Found {
            point: (far, 0, -far),
            distance: 2 * far,
            coverage: 1
        })
    );
}

#[test]
fn test_most_covered_point_matches_brute_force() {
    let nanobots = sample();
    let range = -8i64..=8;
    let best = iproduct!(range.clone(), range.clone(), range.clone())
        .map(|p| {
            let coverage = nanobots.iter().filter(|bot| p.manhattan(bot.pos) <= bot.radius).count();
            (Reverse(coverage), p.manhattan((0, 0, 0)))
        })
        .min()
        .unwrap();

    let found = most_covered_point(&nanobots).unwrap();
    assert_eq!((Reverse(found.coverage), found.distance), best);
}
