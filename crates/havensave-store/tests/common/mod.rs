use chrono::NaiveDate;
use havensave_store::{BackupManager, FixedClock};
use std::fs;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Manager over `root` whose "today" is `today`
#[allow(dead_code)]
pub fn manager_on(root: &Path, today: NaiveDate) -> BackupManager<FixedClock> {
    BackupManager::with_clock(root, 3, FixedClock(today)).unwrap()
}

/// Folder `parent/name` holding `files` plain files spread over two levels
#[allow(dead_code)]
pub fn plain_folder(parent: &Path, name: &str, files: usize) -> PathBuf {
    let folder = parent.join(name);
    let nested = folder.join("nested");
    fs::create_dir_all(&nested).unwrap();
    for i in 0..files {
        let dir = if i % 2 == 0 { &folder } else { &nested };
        fs::write(dir.join(format!("file_{}.dat", i)), format!("payload {}", i)).unwrap();
    }
    folder
}

/// Realistic save folder with `save/game`, `save/info` and a binary companion
#[allow(dead_code)]
pub fn save_folder(parent: &Path, name: &str, version: &str) -> PathBuf {
    let folder = parent.join(name);
    let save = folder.join("save");
    fs::create_dir_all(&save).unwrap();
    fs::write(
        save.join("game"),
        r#"<game mode="normal">
  <ships><ship><characters>
    <c entId="11"><pers><attr><a id="210" points="2"/><a id="9999" points="1"/></attr>
      <skills><s id="1" level="3"/><s id="77" level="1"/></skills></pers></c>
  </characters></ship></ships>
  <storage><item id="157"/><item id="424242"/></storage>
</game>"#,
    )
    .unwrap();
    fs::write(
        save.join("info"),
        format!(r#"<info version="{}" date="Day 3" realTimeDate="2024-06-01"/>"#, version),
    )
    .unwrap();
    fs::write(save.join("stats.bin"), [1u8, 2, 3, 4, 5]).unwrap();
    folder
}

#[allow(dead_code)]
pub fn tmp_files(dir: &Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .count()
}
