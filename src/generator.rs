//! Identifier generation for anonymous graph entities.
//!
//! Nodes created with an empty id, graphs created with the id `"-"` and every edge receive
//! an identifier drawn from an [`IdGenerator`]. A graph and all of its descendants share a
//! single generator instance through [`IdGeneratorRc`], so identifiers stay distinct across
//! the whole tree and not only within one graph.
//!
//! The default [`RandomIdGenerator`] draws from the alphabet `A-Z0-9`. Its randomness source
//! is seeded once per instance, either from the wall clock or from an explicit seed for
//! reproducible output.
//!
//! # Examples
//!
//! ```rust
//! use dotscribe::generator::{IdGenerator, RandomIdGenerator};
//!
//! let mut first = RandomIdGenerator::with_seed(7);
//! let mut second = RandomIdGenerator::with_seed(7);
//!
//! let id = first.next_id(8);
//! assert_eq!(id.len(), 8);
//! assert_eq!(id, second.next_id(8));
//! ```

use std::{
    cell::RefCell,
    rc::Rc,
    time::{SystemTime, UNIX_EPOCH},
};

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Characters used by [`RandomIdGenerator`].
pub const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Identifier length used by [`IdGenerator::generate`].
pub const DEFAULT_ID_LENGTH: usize = 24;

/// A generator shared by every graph of one tree.
pub type IdGeneratorRc = Rc<RefCell<dyn IdGenerator>>;

/// Source of identifiers for anonymous nodes, edges and graphs.
///
/// Two calls are not required to return distinct values; implementations should keep the
/// collision probability negligible for realistic graph sizes.
pub trait IdGenerator {
    /// Returns a new identifier of `length` characters.
    fn next_id(&mut self, length: usize) -> String;

    /// Returns a new identifier of [`DEFAULT_ID_LENGTH`] characters.
    fn generate(&mut self) -> String {
        self.next_id(DEFAULT_ID_LENGTH)
    }
}

/// Pseudo-random [`IdGenerator`] over [`ID_ALPHABET`].
#[derive(Debug, Clone)]
pub struct RandomIdGenerator {
    rng: StdRng,
}

impl RandomIdGenerator {
    /// Creates a generator seeded from the current time.
    #[must_use]
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(seed)
    }

    /// Creates a generator with a fixed seed.
    ///
    /// Two generators with the same seed produce the same identifier sequence, which makes
    /// the output of graphs with anonymous entities reproducible.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        RandomIdGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Wraps this generator into a shareable handle.
    #[must_use]
    pub fn into_shared(self) -> IdGeneratorRc {
        Rc::new(RefCell::new(self))
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| char::from(ID_ALPHABET[self.rng.gen_range(0..ID_ALPHABET.len())]))
            .collect()
    }
}

/// Draws an identifier from a shared generator and logs it.
pub(crate) fn next_shared_id(generator: &IdGeneratorRc) -> String {
    let id = generator.borrow_mut().generate();
    log::debug!("Generated identifier {}", id);
    id
}
