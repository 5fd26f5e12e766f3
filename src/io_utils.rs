use anyhow::{anyhow, Context, Result};
use sevenz_rust::{Password, SevenZReader};
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::model::Record;

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

pub fn is_csv(path: &Path) -> bool {
    has_extension(path, "csv")
}

pub fn is_archive(path: &Path) -> bool {
    has_extension(path, "7z")
}

/// Finds `.csv` tables and `.7z` archives under `data_dir`.
///
/// An archive is skipped when its directory already holds a plain `.csv`.
pub fn scan_sources(data_dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut tables = Vec::new();
    let mut dirs_with_table = HashSet::new();
    let mut archives = Vec::new();

    for entry in WalkDir::new(data_dir).follow_links(false) {
        let entry = entry.with_context(|| format!("walk {}", data_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if is_csv(path) {
            if let Some(parent) = path.parent() {
                dirs_with_table.insert(parent.to_path_buf());
            }
            tables.push(path.to_path_buf());
        } else if is_archive(path) {
            archives.push(path.to_path_buf());
        }
    }

    archives.retain(|p| {
        let parent = p.parent().unwrap_or(data_dir);
        !dirs_with_table.contains(parent)
    });
    tables.sort();
    archives.sort();
    Ok((tables, archives))
}

/// Parses a headed `Name,Gender,Year,Count` table; extra columns are ignored.
pub fn read_records<R: Read>(reader: R, origin: &str) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut out = Vec::new();
    for (idx, row) in rdr.deserialize::<Record>().enumerate() {
        // +2: one for the header, one for 1-based line numbers
        let record = row.with_context(|| format!("parse row {} of {}", idx + 2, origin))?;
        out.push(record);
    }
    Ok(out)
}

pub fn load_records_from_path(path: &Path) -> Result<Vec<Record>> {
    let file = fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
    read_records(file, &path.display().to_string())
}

pub fn load_records_from_archive(path: &Path) -> Result<Vec<Record>> {
    let member = pick_table_member(path)?;
    let data = read_archive_member(path, &member)?;
    read_records(
        data.as_slice(),
        &format!("{} ({} in archive)", path.display(), member),
    )
}

fn open_archive(path: &Path) -> Result<SevenZReader<fs::File>> {
    SevenZReader::open(path, Password::empty())
        .with_context(|| format!("open archive {}", path.display()))
}

/// `a` sorts before `b` as a table member: shorter name first, then lexical.
fn shallower(a: &str, b: &str) -> bool {
    (a.len(), a) < (b.len(), b)
}

/// Name of the `.csv` entry to load from an archive.
fn pick_table_member(path: &Path) -> Result<String> {
    let mut best: Option<String> = None;
    open_archive(path)?
        .for_each_entries(|entry, _| {
            let name = entry.name();
            let better = best.as_deref().map_or(true, |b| shallower(name, b));
            if better && is_csv(Path::new(name)) {
                best = Some(name.to_string());
            }
            Ok(true)
        })
        .with_context(|| format!("list entries of {}", path.display()))?;
    best.ok_or_else(|| anyhow!("no .csv table found in archive {}", path.display()))
}

fn read_archive_member(path: &Path, member: &str) -> Result<Vec<u8>> {
    let mut data: Option<Vec<u8>> = None;
    open_archive(path)?
        .for_each_entries(|entry, reader| {
            if entry.name() != member {
                return Ok(true);
            }
            let mut buf = Vec::new();
            reader.read_to_end(&mut buf)?;
            data = Some(buf);
            Ok(false)
        })
        .with_context(|| format!("read {} from {}", member, path.display()))?;
    data.ok_or_else(|| anyhow!("{} vanished from archive {}", member, path.display()))
}

pub fn file_name_of(path: &Path) -> &str {
    path.file_name().and_then(OsStr::to_str).unwrap_or("")
}
