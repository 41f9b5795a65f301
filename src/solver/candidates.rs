//! The shrinking set of equations still consistent with all feedback

/// Universe indices that could still be the hidden equation
///
/// Indices are kept in ascending order next to a membership bitmap, so both
/// ordered iteration and `contains` are cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    members: Vec<usize>,
    mask: Vec<bool>,
}

impl CandidateSet {
    /// Every index of a universe of `size` equations
    #[must_use]
    pub fn full(size: usize) -> Self {
        Self {
            members: (0..size).collect(),
            mask: vec![true; size],
        }
    }

    /// A subset of a universe of `size` equations
    ///
    /// Out-of-range and repeated indices are ignored.
    ///
    /// # Examples
    /// ```
    /// use nerdle_solver::solver::CandidateSet;
    ///
    /// let set = CandidateSet::from_indices(10, [7, 2, 7, 42]);
    /// assert_eq!(set.indices(), &[2, 7]);
    /// assert!(set.contains(7));
    /// assert!(!set.contains(42));
    /// ```
    #[must_use]
    pub fn from_indices<I>(size: usize, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut mask = vec![false; size];
        for index in indices {
            if let Some(slot) = mask.get_mut(index) {
                *slot = true;
            }
        }

        let members = mask
            .iter()
            .enumerate()
            .filter_map(|(i, &member)| member.then_some(i))
            .collect();

        Self { members, mask }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Size of the universe this set indexes into
    #[inline]
    #[must_use]
    pub fn universe_size(&self) -> usize {
        self.mask.len()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.mask.get(index).copied().unwrap_or(false)
    }

    /// Members in ascending order
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.members
    }

    /// The member, if exactly one remains
    #[must_use]
    pub fn sole(&self) -> Option<usize> {
        match self.members.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().copied()
    }

    /// Members for which `keep` holds, as a new set over the same universe
    #[must_use]
    pub fn filtered<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(usize) -> bool,
    {
        let mut mask = vec![false; self.mask.len()];
        let members: Vec<usize> = self
            .members
            .iter()
            .copied()
            .filter(|&index| keep(index))
            .collect();

        for &index in &members {
            mask[index] = true;
        }

        Self { members, mask }
    }
}
