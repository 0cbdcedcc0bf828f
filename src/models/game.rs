//! Game: the pending roster, the district tree, and the seeded generator.

use crate::config::GameConfig;
use crate::models::district::District;
use crate::models::person::{DistrictId, Person};
use crate::models::tree::{DistrictTree, TreeNode};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Errors that can occur while setting up a game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    /// Birth month outside 1..=12.
    InvalidBirthMonth(u8),
    /// A district with this id already exists in the roster or the game.
    DuplicateDistrict(DistrictId),
    /// No district with this id in the roster.
    DistrictNotFound(DistrictId),
    /// Configuration could not be parsed.
    InvalidConfig(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidBirthMonth(month) => {
                write!(f, "Birth month must be between 1 and 12 (got {})", month)
            }
            GameError::DuplicateDistrict(id) => write!(f, "District {} already exists", id),
            GameError::DistrictNotFound(id) => write!(f, "District {} not found", id),
            GameError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}

/// Full engine state. A district lives either in the roster (`districts`) or in the tree,
/// never both.
#[derive(Clone, Debug)]
pub struct Game {
    /// Districts not yet entered into the game.
    pub(crate) districts: Vec<District>,
    /// Districts still in the game.
    pub(crate) tree: DistrictTree,
    /// Every random draw of the game comes from here, in traversal order.
    pub(crate) rng: StdRng,
    config: GameConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    /// Create a game with an empty roster and an empty tree.
    pub fn new(config: GameConfig) -> Self {
        Self {
            districts: Vec::new(),
            tree: DistrictTree::new(),
            rng: StdRng::seed_from_u64(config.seed),
            config,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameConfig::with_seed(seed))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Districts still waiting in the roster, in the order they were added.
    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn tree(&self) -> &DistrictTree {
        &self.tree
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.tree.root()
    }

    /// Append an empty district to the roster. Ids must be unique across roster and tree.
    pub fn add_district(&mut self, id: DistrictId) -> Result<(), GameError> {
        if self.districts.iter().any(|d| d.id() == id) || self.tree.contains(id) {
            return Err(GameError::DuplicateDistrict(id));
        }
        self.districts.push(District::new(id));
        Ok(())
    }

    /// Place a person into their district in the roster (odd or even by birth month).
    pub fn add_person(&mut self, person: Person) -> Result<(), GameError> {
        let id = person.district_id;
        let district = self
            .districts
            .iter_mut()
            .find(|d| d.id() == id)
            .ok_or(GameError::DistrictNotFound(id))?;
        district.add_person(person);
        Ok(())
    }

    /// Enter a district into the game. Any roster entry with the same id is dropped.
    /// Returns false if the id is already in the game (the tree is left unchanged).
    pub fn add_district_to_game(&mut self, district: District) -> bool {
        let id = district.id();
        self.districts.retain(|d| d.id() != id);
        let inserted = self.tree.insert(district);
        if inserted {
            log::debug!("District {} entered the game", id);
        }
        inserted
    }

    /// Look up a district still in the game.
    pub fn find_district(&self, id: DistrictId) -> Option<&District> {
        self.tree.find(id)
    }

    pub(crate) fn find_district_mut(&mut self, id: DistrictId) -> Option<&mut District> {
        self.tree.find_mut(id)
    }

    /// Remove a district from the game for good. Absent ids are a no-op.
    pub fn eliminate_district(&mut self, id: DistrictId) -> Option<District> {
        self.districts.retain(|d| d.id() != id);
        let removed = self.tree.remove(id);
        if removed.is_some() {
            log::info!("District {} has been eliminated", id);
        }
        removed
    }

    /// Number of districts still in the game.
    pub fn remaining_districts(&self) -> usize {
        self.tree.len()
    }

    /// Number of people in districts still in the game (roster excluded).
    pub fn population(&self) -> usize {
        self.tree.districts().map(District::population).sum()
    }

    /// The last district standing, once exactly one is left.
    pub fn winner(&self) -> Option<&District> {
        let root = self.tree.root()?;
        if root.left().is_none() && root.right().is_none() {
            Some(root.district())
        } else {
            None
        }
    }
}
