use std::collections::BTreeSet;
use std::fs;

/// A single writer open flag.
///
/// `Create` and `CreateNew` are accepted for caller convenience but are
/// stripped before opening: a [`crate::File`] always names an existing
/// entry, so creating on open would be redundant (`Create`) or guaranteed
/// to fail (`CreateNew`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WriteOption {
    Append,
    Truncate,
    Create,
    CreateNew,
}

const CREATION_FLAGS: [WriteOption; 2] = [WriteOption::Create, WriteOption::CreateNew];

/// A small ordered set of writer open flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions {
    flags: BTreeSet<WriteOption>,
}

impl WriteOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, flag: WriteOption) -> Self {
        self.flags.insert(flag);
        self
    }

    #[must_use]
    pub fn contains(&self, flag: WriteOption) -> bool {
        self.flags.contains(&flag)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Removes the creation flags as a set difference, logging each flag
    /// actually removed. A set already free of them passes through
    /// unchanged.
    pub(crate) fn without_creation_flags(mut self) -> Self {
        for flag in CREATION_FLAGS {
            if self.flags.remove(&flag) {
                tracing::debug!(
                    ?flag,
                    "ignoring creation flag; the handle's file already exists"
                );
            }
        }
        self
    }

    pub(crate) fn to_std(&self) -> fs::OpenOptions {
        let mut options = fs::OpenOptions::new();
        options.write(true);
        for flag in &self.flags {
            match flag {
                WriteOption::Append => options.append(true),
                WriteOption::Truncate => options.truncate(true),
                WriteOption::Create => options.create(true),
                WriteOption::CreateNew => options.create_new(true),
            };
        }
        options
    }
}

impl FromIterator<WriteOption> for WriteOptions {
    fn from_iter<I: IntoIterator<Item = WriteOption>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}
