//! Plain-text output for relaxed paths.
//!
//! These writers produce simple whitespace-separated tables suitable for
//! external plotting tools (gnuplot, matplotlib); plotting itself is left
//! to those tools.

use crate::chain::Chain;
use nalgebra::Vector2;
use std::fs;
use std::io::Result;
use std::path::Path;

/// Writes the chain positions as one `index x y` line per image.
///
/// # Examples
///
/// ```
/// use nalgebra::Vector2;
/// use openneb::{io, Chain};
///
/// fn main() -> std::io::Result<()> {
///     let chain = Chain::interpolated(3, Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
///     let file = std::env::temp_dir().join("openneb_doc_path.dat");
///     io::write_path(&chain, &file)?;
///     std::fs::remove_file(&file)?;
///     Ok(())
/// }
/// ```
pub fn write_path(chain: &Chain, path: &Path) -> Result<()> {
    let mut content = String::new();
    for image in chain.images() {
        content.push_str(&format!(
            "{}  {:.10}  {:.10}\n",
            image.index, image.position.x, image.position.y
        ));
    }
    fs::write(path, content)
}

/// Writes the energy profile along the chain as one
/// `arc_length energy` line per image, with arc length accumulated from
/// the first image.
pub fn write_energy_profile<F>(chain: &Chain, potential: &F, path: &Path) -> Result<()>
where
    F: Fn(f64, f64) -> f64,
{
    let mut content = String::new();
    let mut arc_length = 0.0;
    let mut previous: Option<Vector2<f64>> = None;
    for image in chain.images() {
        if let Some(prev) = previous {
            arc_length += (image.position - prev).norm();
        }
        previous = Some(image.position);
        content.push_str(&format!(
            "{:.10}  {:.10}\n",
            arc_length,
            potential(image.position.x, image.position.y)
        ));
    }
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn test_write_path_line_count() {
        let chain = Chain::interpolated(2, Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0));
        let file = std::env::temp_dir().join("openneb_test_path.dat");
        write_path(&chain, &file).unwrap();
        let content = fs::read_to_string(&file).unwrap();
        assert_eq!(content.lines().count(), 4);
        fs::remove_file(&file).unwrap();
    }

    #[test]
    fn test_write_energy_profile_accumulates_arc_length() {
        let chain = Chain::interpolated(1, Vector2::new(0.0, 0.0), Vector2::new(2.0, 0.0));
        let file = std::env::temp_dir().join("openneb_test_profile.dat");
        write_energy_profile(&chain, &|x, _y| x, &file).unwrap();
        let content = fs::read_to_string(&file).unwrap();
        let arc_lengths: Vec<f64> = content
            .lines()
            .map(|line| line.split_whitespace().next().unwrap().parse().unwrap())
            .collect();
        assert_eq!(arc_lengths, vec![0.0, 1.0, 2.0]);
        fs::remove_file(&file).unwrap();
    }
}
