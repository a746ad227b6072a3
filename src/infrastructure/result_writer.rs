use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{FinderError, FinderResult};

/// 将匹配结果逐行写入 `dir/file_name`，并同时回显到 `echo`
///
/// 已存在的同名文件会被覆盖，目录不存在时自动创建。返回写入的文件路径。
pub fn write_results<W: Write>(
    dir: &Path,
    file_name: &str,
    results: &[PathBuf],
    echo: &mut W,
) -> FinderResult<PathBuf> {
    let target = dir.join(file_name);

    fs::create_dir_all(dir).map_err(|err| FinderError::io(dir, err))?;
    let file = File::create(&target).map_err(|err| FinderError::io(&target, err))?;
    let mut writer = BufWriter::new(file);

    for path in results {
        writeln!(writer, "{}", path.display()).map_err(|err| FinderError::io(&target, err))?;
        writeln!(echo, "{}", path.display()).map_err(FinderError::echo)?;
    }

    writer
        .flush()
        .map_err(|err| FinderError::io(&target, err))?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use tempfile::tempdir;

    /// 总是写入失败的输出，模拟已关闭的管道
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_results() {
        let temp_dir = tempdir().unwrap();
        let data_dir = temp_dir.path().join("data");
        let results = vec![PathBuf::from("root/a.txt"), PathBuf::from("root/sub/c.txt")];
        let mut echo = Vec::new();

        let target = write_results(&data_dir, "out.txt", &results, &mut echo).unwrap();

        assert_eq!(target, data_dir.join("out.txt"));
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "root/a.txt\nroot/sub/c.txt\n"
        );
        assert_eq!(String::from_utf8(echo).unwrap(), "root/a.txt\nroot/sub/c.txt\n");
    }

    #[test]
    fn test_write_results_overwrites() {
        let temp_dir = tempdir().unwrap();
        let target = temp_dir.path().join("out.txt");
        fs::write(&target, "old line 1\nold line 2\nold line 3\n").unwrap();

        write_results(
            temp_dir.path(),
            "out.txt",
            &[PathBuf::from("new.txt")],
            &mut Vec::new(),
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new.txt\n");
    }

    #[test]
    fn test_unwritable_target_is_io_error() {
        let temp_dir = tempdir().unwrap();
        // 同名目录占据了目标路径
        fs::create_dir(temp_dir.path().join("out.txt")).unwrap();

        let err = write_results(
            temp_dir.path(),
            "out.txt",
            &[PathBuf::from("a.txt")],
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, FinderError::Io { .. }));
    }

    #[test]
    fn test_echo_failure_is_not_blamed_on_target() {
        let temp_dir = tempdir().unwrap();

        let err = write_results(
            temp_dir.path(),
            "out.txt",
            &[PathBuf::from("a.txt")],
            &mut ClosedPipe,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            FinderError::Echo(ref source) if source.kind() == io::ErrorKind::BrokenPipe
        ));
        assert!(!err.to_string().contains("out.txt"));
    }
}
