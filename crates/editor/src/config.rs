//! Run configuration, read from `--flag value` style command-line arguments.

use anyhow::{Context, Result, bail};
use snowfall_engine::region::{CuboidRegion, CylinderRegion, Region};
use snowfall_engine::world::position::{BlockPos, ColumnPos};

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Horizontal radius of the snowfall area.
    pub radius: f64,
    pub center: ColumnPos,
    /// Top of the scan (inclusive).
    pub height: i64,
    /// Bottom of the scan (inclusive).
    pub floor: i64,
    pub max_changes: Option<usize>,
    /// Demo world size, in chunks from the origin.
    pub world_radius: i32,
    /// Use the cuboid enclosing the disc instead of the disc itself.
    pub cuboid: bool,
    pub json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            center: ColumnPos::new(0, 0),
            height: 64,
            floor: 0,
            max_changes: None,
            world_radius: 2,
            cuboid: false,
            json: false,
        }
    }
}

impl RunConfig {
    /// Parse from arguments (program name excluded). Unknown flags are
    /// ignored; a flag with a missing or malformed value is an error.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let defaults = Self::default();

        let radius: f64 = match flag_value(&args, "--radius")? {
            Some(v) => v.parse().with_context(|| format!("--radius: invalid number {v:?}"))?,
            None => defaults.radius,
        };
        if !radius.is_finite() {
            bail!("--radius must be a finite number, got {radius}");
        }
        let center = match flag_value(&args, "--center")? {
            Some(v) => parse_center(v).with_context(|| format!("--center: expected x,z, got {v:?}"))?,
            None => defaults.center,
        };
        let height = match flag_value(&args, "--height")? {
            Some(v) => v.parse().with_context(|| format!("--height: invalid integer {v:?}"))?,
            None => defaults.height,
        };
        let floor = match flag_value(&args, "--floor")? {
            Some(v) => v.parse().with_context(|| format!("--floor: invalid integer {v:?}"))?,
            None => defaults.floor,
        };
        let max_changes = match flag_value(&args, "--max-changes")? {
            Some(v) => Some(v.parse().with_context(|| format!("--max-changes: invalid count {v:?}"))?),
            None => defaults.max_changes,
        };
        let world_radius = match flag_value(&args, "--world-radius")? {
            Some(v) => v.parse().with_context(|| format!("--world-radius: invalid integer {v:?}"))?,
            None => defaults.world_radius,
        };

        Ok(Self {
            radius,
            center,
            height,
            floor,
            max_changes,
            world_radius,
            cuboid: args.iter().any(|a| a == "--cuboid"),
            json: args.iter().any(|a| a == "--json"),
        })
    }

    /// The area snow falls on.
    pub fn region(&self) -> Box<dyn Region> {
        if self.cuboid {
            let reach = self.radius.max(0.0).floor() as i64;
            Box::new(CuboidRegion::new(
                BlockPos::new(self.center.x - reach, self.floor, self.center.z - reach),
                BlockPos::new(self.center.x + reach, self.height, self.center.z + reach),
            ))
        } else {
            Box::new(CylinderRegion::new(self.center, self.radius, self.floor, self.height))
        }
    }
}

/// The argument following `flag`, if the flag is present.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>> {
    let Some(idx) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    match args.get(idx + 1) {
        Some(v) => Ok(Some(v.as_str())),
        None => bail!("{flag} requires a value"),
    }
}

fn parse_center(s: &str) -> Result<ColumnPos> {
    let (x, z) = s.split_once(',').context("missing comma")?;
    Ok(ColumnPos::new(x.trim().parse()?, z.trim().parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_args_give_defaults() {
        assert_eq!(RunConfig::from_args(args(&[])).unwrap(), RunConfig::default());
    }

    #[test]
    fn all_flags_parse() {
        let cfg = RunConfig::from_args(args(&[
            "--radius", "4.5", "--center", "-3, 7", "--height", "90", "--floor", "-10",
            "--max-changes", "25", "--world-radius", "3", "--cuboid", "--json",
        ]))
        .unwrap();
        assert_eq!(cfg.radius, 4.5);
        assert_eq!(cfg.center, ColumnPos::new(-3, 7));
        assert_eq!(cfg.height, 90);
        assert_eq!(cfg.floor, -10);
        assert_eq!(cfg.max_changes, Some(25));
        assert_eq!(cfg.world_radius, 3);
        assert!(cfg.cuboid);
        assert!(cfg.json);
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let cfg = RunConfig::from_args(args(&["--verbose", "--radius", "2"])).unwrap();
        assert_eq!(cfg.radius, 2.0);
    }

    #[test]
    fn malformed_value_names_the_flag() {
        let err = RunConfig::from_args(args(&["--max-changes", "lots"])).unwrap_err();
        assert!(format!("{err:#}").contains("--max-changes"));
    }

    #[test]
    fn missing_value_is_an_error() {
        let err = RunConfig::from_args(args(&["--height"])).unwrap_err();
        assert!(err.to_string().contains("--height requires a value"));
    }

    #[test]
    fn non_finite_radius_is_rejected() {
        for bad in ["inf", "-inf", "NaN"] {
            let err = RunConfig::from_args(args(&["--radius", bad])).unwrap_err();
            assert!(err.to_string().contains("--radius must be a finite number"), "{bad}: {err}");
        }
    }

    #[test]
    fn bad_center_is_an_error() {
        assert!(RunConfig::from_args(args(&["--center", "12"])).is_err());
        assert!(RunConfig::from_args(args(&["--center", "a,b"])).is_err());
    }

    #[test]
    fn region_shape_follows_flag() {
        let mut cfg = RunConfig {
            radius: 2.0,
            height: 9,
            floor: 1,
            ..RunConfig::default()
        };
        let disc = cfg.region();
        assert_eq!(disc.column_count(), 13);
        assert_eq!((disc.min_y(), disc.max_y()), (1, 9));

        cfg.cuboid = true;
        assert_eq!(cfg.region().column_count(), 25);
    }
}
