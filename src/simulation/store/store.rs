use crate::systems::bodies::{CircleBody, Item};

/// Index-stable body store.
///
/// `slots` is the sparse view: a slot index refers to the same body for its
/// whole lifetime and becomes `None` after removal. `live` is the dense view
/// (slot indices of live bodies, in insertion order). `collision_flags` has
/// one entry per slot and is reset every tick.
#[derive(Default)]
pub struct ItemStore {
    slots: Vec<Option<Item>>,
    live: Vec<usize>,
    collision_flags: Vec<bool>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a body in the lowest free slot (or a new one) and return its index.
    pub fn insert(&mut self, item: Item) -> usize {
        let index = match self.slots.iter().position(Option::is_none) {
            Some(hole) => {
                self.slots[hole] = Some(item);
                self.collision_flags[hole] = false;
                hole
            }
            None => {
                self.slots.push(Some(item));
                self.collision_flags.push(false);
                self.slots.len() - 1
            }
        };
        self.live.push(index);
        index
    }

    /// Empty the slot, leaving a hole. Returns the removed body.
    pub fn remove(&mut self, index: usize) -> Option<Item> {
        let item = self.slots.get_mut(index)?.take()?;
        if let Some(pos) = self.live.iter().position(|&i| i == index) {
            self.live.remove(pos);
        }
        Some(item)
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.slots.get(index)?.as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Live bodies in dense (insertion) order
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, &Item)> + '_ {
        self.live
            .iter()
            .filter_map(move |&i| self.slots[i].as_ref().map(|item| (i, item)))
    }

    /// Dense view as slot indices
    pub fn live_indices(&self) -> &[usize] {
        &self.live
    }

    /// Sparse view, holes included
    pub fn slots(&self) -> &[Option<Item>] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Option<Item>] {
        &mut self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.live.clear();
        self.collision_flags.clear();
    }

    pub fn collision_flag(&self, index: usize) -> bool {
        self.collision_flags.get(index).copied().unwrap_or(false)
    }

    pub(crate) fn set_collision_flag(&mut self, index: usize) {
        if let Some(flag) = self.collision_flags.get_mut(index) {
            *flag = true;
        }
    }

    pub(crate) fn reset_collision_flags(&mut self) {
        self.collision_flags.fill(false);
    }

    /// Both balls at `i < j`, mutably. `None` if either slot is empty or not a ball.
    pub(crate) fn circle_pair_mut(&mut self, i: usize, j: usize) -> Option<(&mut CircleBody, &mut CircleBody)> {
        debug_assert!(i < j);
        let (head, tail) = self.slots.split_at_mut(j);
        let a = head.get_mut(i)?.as_mut()?.as_circle_mut()?;
        let b = tail.first_mut()?.as_mut()?.as_circle_mut()?;
        Some((a, b))
    }
}
