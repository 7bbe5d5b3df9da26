//! Engine configuration with sane defaults.

/// Tunables for segmentation and store formatting.
#[derive(Debug, Clone)]
pub struct Config {
  /// Inclusive lower bound of the trimmed length marking a sentinel line.
  pub sentinel_min_len: usize,
  /// Inclusive upper bound of the trimmed length marking a sentinel line.
  pub sentinel_max_len: usize,
  /// Row height applied to inserted rows, in points.
  pub row_height_points: f32,
  /// Character width of the exception column.
  pub exception_col_chars: u32,
  /// Header fill color for freshly created partitions.
  pub header_fill_rgb: String,
  /// File name used when the store argument is a directory.
  pub store_basename: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      sentinel_min_len: 13,
      sentinel_max_len: 15,
      row_height_points: 90.0,
      exception_col_chars: 100,
      header_fill_rgb: "#E97132".into(),
      store_basename: "Exceptions.json".into(),
    }
  }
}
