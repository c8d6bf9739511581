/// Neighbor counts that bring a dead cell to life or keep a live one alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub birth: Vec<usize>,
    pub survive: Vec<usize>,
}

impl Rule {
    pub fn next_alive(&self, alive: bool, alive_neighbors: usize) -> bool {
        if alive {
            self.survive.contains(&alive_neighbors)
        } else {
            self.birth.contains(&alive_neighbors)
        }
    }
}

impl Default for Rule {
    // B3/S23
    fn default() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }
}
