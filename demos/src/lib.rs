//! Shared battlefield model for the pathing demo.
//!
//! Builds a random map with forests, a few buildings and scattered units,
//! then renders it with a path overlay.

use log::info;
use rand::{RngExt, SeedableRng};
use tzar_core::{GridError, Occupancy, Point, Range, SpatialGrid};

pub const WIDTH: i32 = 64;
pub const HEIGHT: i32 = 32;
pub const CHUNK: i32 = 8;

const FORESTS: usize = 10;
const BUILDINGS: usize = 6;
const UNITS: usize = 40;

/// Parse `[seed] [width height]`, falling back to seed 1 and a
/// `WIDTH`x`HEIGHT` map.
pub fn parse_args(args: &[String]) -> Result<(u64, Point), String> {
    fn num<T>(args: &[String], i: usize, name: &str) -> Result<Option<T>, String>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        args.get(i)
            .map(|s| s.parse::<T>().map_err(|e| format!("bad {name} {s:?}: {e}")))
            .transpose()
    }
    let seed = num::<u64>(args, 0, "seed")?.unwrap_or(1);
    let size = match (num::<i32>(args, 1, "width")?, num::<i32>(args, 2, "height")?) {
        (Some(w), Some(h)) => Point::new(w, h),
        (None, None) => Point::new(WIDTH, HEIGHT),
        _ => return Err("width and height go together".into()),
    };
    Ok((seed, size))
}

/// A generated map plus the corners a unit walks between.
pub struct Battlefield {
    pub grid: SpatialGrid,
    pub start: Point,
    pub target: Point,
}

impl Battlefield {
    /// Generate a `size` battlefield from `seed`. The same seed always gives
    /// the same map.
    pub fn generate(size: Point, seed: u64) -> Result<Self, GridError> {
        let mut grid = SpatialGrid::new(size, Point::new(CHUNK, CHUNK))?;
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

        for _ in 0..FORESTS {
            let c = Point::new(rng.random_range(0..size.x), rng.random_range(0..size.y));
            let r = rng.random_range(2..5);
            for p in Range::new(c.x - r, c.y - r, c.x + r + 1, c.y + r + 1) {
                let d = (p - c).x.abs() + (p - c).y.abs();
                if d <= r && rng.random_range(0..3) > 0 {
                    grid.set(p, Occupancy::Tree);
                }
            }
        }
        for _ in 0..BUILDINGS {
            let min = Point::new(
                rng.random_range(0..size.x - 4),
                rng.random_range(0..size.y - 4),
            );
            let dim = Point::new(rng.random_range(2..5), rng.random_range(2..5));
            grid.fill_range(
                Range::new(min.x, min.y, min.x + dim.x, min.y + dim.y),
                Occupancy::Building,
            );
        }
        for _ in 0..UNITS {
            let p = Point::new(rng.random_range(0..size.x), rng.random_range(0..size.y));
            if grid.at(p) == Some(Occupancy::None) {
                grid.set(p, Occupancy::Unit);
            }
        }

        let start = Point::new(0, 0);
        let target = Point::new(size.x - 1, size.y - 1);
        grid.set(start, Occupancy::Unit);
        grid.set(target, Occupancy::None);
        info!("battlefield {}x{} from seed {seed}", size.x, size.y);
        Ok(Self {
            grid,
            start,
            target,
        })
    }

    /// Text map with the path drawn as `*`, start as `S` and target as `G`.
    pub fn render(&self, path: &[Point]) -> String {
        let size = self.grid.size();
        let mut rows: Vec<Vec<char>> = (0..size.y)
            .map(|y| {
                (0..size.x)
                    .map(|x| self.grid.at(Point::new(x, y)).unwrap_or_default().glyph())
                    .collect()
            })
            .collect();
        for p in path {
            rows[p.y as usize][p.x as usize] = '*';
        }
        rows[self.start.y as usize][self.start.x as usize] = 'S';
        rows[self.target.y as usize][self.target.x as usize] = 'G';
        let mut out = String::with_capacity(((size.x + 1) * size.y) as usize);
        for row in rows {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}
