//! Choosing the chart that covers a position.

use tracing::debug;

use crate::{
    angle::Dms,
    store::{load_reference_grid, DataRoot, LoadError},
};

/// The name of the first chart under the root whose whole-degree bounds
/// cover the position.
///
/// Bounds are closed below and open above on both axes. When several
/// charts overlap, the winner follows directory enumeration order, which
/// is filesystem-dependent; callers must not rely on a particular one.
///
/// # Errors
/// A malformed reference table anywhere under the root is fatal, not
/// skipped: it signals a broken installation rather than a miss.
pub fn find_chart(root: &DataRoot, lat: Dms, long: Dms) -> Result<Option<String>, LoadError> {
    for name in root.chart_names()? {
        let grid = load_reference_grid(root, &name)?;
        if let Some(bounds) = grid.bounds() {
            if bounds.contains(lat.degrees(), long.degrees()) {
                debug!(chart = %name, "position is on chart");
                return Ok(Some(name));
            }
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_reference(root: &TempDir, name: &str, body: &str) {
        let dir = root.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("map.csv"), body).unwrap();
    }

    fn roots() -> (TempDir, DataRoot) {
        let tmp = TempDir::new().unwrap();
        write_reference(
            &tmp,
            "caucasus",
            "lat,long,x,y\n41,39,0,4000\n45,39,0,0\n41,44,5000,4000\n45,44,5000,0\n",
        );
        write_reference(
            &tmp,
            "nevada",
            "lat,long,x,y\n35,-118,0,4000\n38,-118,0,0\n35,-114,5000,4000\n38,-114,5000,0\n",
        );
        let root = DataRoot::new(tmp.path());
        (tmp, root)
    }

    #[test]
    fn point_resolves_to_its_chart() {
        let (_tmp, root) = roots();

        let found = find_chart(&root, Dms::whole(44), Dms::whole(39)).unwrap();
        assert_eq!(found.as_deref(), Some("caucasus"));

        let found = find_chart(&root, Dms::whole(36), Dms::whole(-116)).unwrap();
        assert_eq!(found.as_deref(), Some("nevada"));
    }

    #[test]
    fn upper_bound_degree_is_off_chart() {
        let (_tmp, root) = roots();

        // latitude 45 is the open upper edge of the caucasus grid
        let found = find_chart(&root, Dms::whole(45), Dms::whole(39)).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn point_outside_every_chart_is_none() {
        let (_tmp, root) = roots();

        let found = find_chart(&root, Dms::whole(48), Dms::whole(3)).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn empty_root_finds_nothing() {
        let tmp = TempDir::new().unwrap();
        let root = DataRoot::new(tmp.path());

        assert_eq!(find_chart(&root, Dms::whole(44), Dms::whole(39)).unwrap(), None);
    }

    #[test]
    #[should_panic(expected = "InvalidReferenceData")]
    fn malformed_table_under_the_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        write_reference(&tmp, "broken", "lat,long,x,y\n41,39\n");

        let root = DataRoot::new(tmp.path());
        let _f = find_chart(&root, Dms::whole(44), Dms::whole(39)).unwrap();
    }
}
