use log::debug;
use rand::Rng;
use std::{
    env::temp_dir,
    fs::{create_dir, remove_dir_all, OpenOptions},
    io::{self, Write},
    path::PathBuf,
    time::Instant,
};
use uuid::Uuid;

/// A disposable file tree under the system temp folder, used as a hashing
/// target by the tests. Dropped trees are removed with `clean()`.
pub struct UseCase {
    pub files: Vec<PathBuf>,
    pub root: PathBuf,
}

impl UseCase {
    /// Generates a tree: `folders` folders per level, `files` files (with
    /// random content) per folder, `deep` nested levels below the first.
    pub fn gen(folders: u16, files: u16, deep: u8) -> Result<Self, io::Error> {
        let now = Instant::now();
        let mut created = Vec::new();
        let mut fill = |parent: &PathBuf| -> Result<Vec<PathBuf>, io::Error> {
            let mut nested = Vec::new();
            for _ in 0..folders {
                let folder = parent.join(Uuid::new_v4().to_string());
                create_dir(&folder)?;
                for _ in 0..files {
                    let filename = folder.join(Uuid::new_v4().to_string());
                    let mut content = vec![0u8; rand::thread_rng().gen_range(1..4096)];
                    rand::thread_rng().fill(content.as_mut_slice());
                    write(&filename, &content)?;
                    created.push(filename);
                }
                nested.push(folder);
            }
            Ok(nested)
        };
        let root = fresh_root()?;
        let mut parents = fill(&root)?;
        for _ in 0..deep {
            let to_be_processed: Vec<PathBuf> = parents.to_vec();
            parents = Vec::new();
            for folder in to_be_processed.iter() {
                parents.append(&mut fill(folder)?);
            }
        }
        debug!(
            "in \"{}\" created {} files in {}µs / {}ms / {}s",
            root.display(),
            created.len(),
            now.elapsed().as_micros(),
            now.elapsed().as_millis(),
            now.elapsed().as_secs()
        );
        Ok(Self {
            files: created,
            root,
        })
    }

    /// A fresh root holding exactly one file with the given content.
    pub fn single(content: &[u8]) -> Result<Self, io::Error> {
        let root = fresh_root()?;
        let filename = root.join(Uuid::new_v4().to_string());
        write(&filename, content)?;
        Ok(Self {
            files: vec![filename],
            root,
        })
    }

    /// A fresh root with nothing in it.
    pub fn empty() -> Result<Self, io::Error> {
        Ok(Self {
            files: Vec::new(),
            root: fresh_root()?,
        })
    }

    pub fn clean(&self) -> Result<(), io::Error> {
        if !self.root.exists() {
            return Ok(());
        }
        if !self.root.starts_with(temp_dir()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("root isn't belong to {}", temp_dir().display()),
            ));
        }
        remove_dir_all(&self.root)?;
        debug!("Removed {}", self.root.display());
        Ok(())
    }
}

fn fresh_root() -> Result<PathBuf, io::Error> {
    let root = temp_dir().join(Uuid::new_v4().to_string());
    if root.exists() {
        remove_dir_all(&root)?;
    }
    create_dir(&root)?;
    Ok(root)
}

fn write(filename: &PathBuf, content: &[u8]) -> Result<(), io::Error> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(filename)?;
    file.write_all(content)?;
    file.flush()
}
