//! Timestamped file output

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use log::debug;

/// Seconds since the Unix epoch with a microsecond fraction,
/// e.g. `1675000000.123456`
pub fn timestamp_id(at: SystemTime) -> String
{   let since = at.duration_since(UNIX_EPOCH).unwrap_or_default();
    format!("{}.{:06}", since.as_secs(), since.subsec_micros())
}

/// Write `content` to `<dir>/<stem>.txt` without overwriting anything.
/// A taken name gets a `-1`, `-2`, ... suffix. Creates `dir` if needed.
pub fn write_unique(
  dir: &Path
, stem: &str
, content: &str
) -> Result<PathBuf, crate::error::Error>
{   std::fs::create_dir_all(dir)
      .map_err(|e| crate::error::Error::io(dir, e))?;

    let mut suffix = 0usize;
    loop
    {   let name = match suffix
        {   0 => format!("{}.txt", stem)
          , n => format!("{}-{}.txt", stem, n)
        };
        let path = dir.join(name);

        match OpenOptions::new().write(true).create_new(true).open(&path)
        {   Ok(mut file) => {
              file.write_all(content.as_bytes())
                .map_err(|e| crate::error::Error::io(&path, e))?;
              debug!("Wrote {}", path.display());
              return Ok(path);
            }
          , Err(e) if e.kind() == ErrorKind::AlreadyExists => {
              suffix += 1;
            }
          , Err(e) => return Err(crate::error::Error::io(&path, e))
        }
    }
}

/// Write `content` to `<dir>/<prefix>_<timestamp>.txt`
pub fn write_timestamped(
  dir: &Path
, prefix: &str
, content: &str
) -> Result<PathBuf, crate::error::Error>
{   let stem = format!("{}_{}", prefix, timestamp_id(SystemTime::now()));
    write_unique(dir, &stem, content)
}

#[cfg(test)]
mod tests
{   use super::*;
    use std::time::Duration;

    #[test]
    fn timestamp_has_fraction()
    {   let at = UNIX_EPOCH + Duration::from_micros(1_675_000_000_000_042);
        assert_eq!(timestamp_id(at), "1675000000.000042");
    }

    #[test]
    fn colliding_names_get_suffix()
    {   let dir = tempfile::tempdir().unwrap();
        let first = write_unique(dir.path(), "same", "one").unwrap();
        let second = write_unique(dir.path(), "same", "two").unwrap();
        assert_ne!(first, second);
        assert!(second.ends_with("same-1.txt"));
        assert_eq!(std::fs::read_to_string(first).unwrap(), "one");
        assert_eq!(std::fs::read_to_string(second).unwrap(), "two");
    }

    #[test]
    fn timestamped_file_lands_in_dir()
    {   let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out");
        let path = write_timestamped(&nested, "cover_letter", "Dear")
          .unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("cover_letter_"));
        assert!(name.ends_with(".txt"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "Dear");
    }
}
