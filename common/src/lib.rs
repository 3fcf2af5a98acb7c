pub mod solver;

pub const NR_PEGS: usize = 3;

/// A puzzle piece. Larger disks may never rest on smaller ones.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Disk {
    size: u8,
}

impl Disk {
    pub fn new(size: u8) -> Self {
        assert!(size > 0, "disk sizes start at 1");
        Disk { size }
    }

    pub fn size(self) -> u8 {
        self.size
    }
}

/// Identifies one of the three pegs, in board order from left to right.
///
/// Doubles as the peg's index into the game's peg array. The tag is pure
/// bookkeeping; all three pegs behave the same.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum PegKind {
    Start,
    Interm,
    End,
}

impl PegKind {
    pub fn all() -> [PegKind; NR_PEGS] {
        [PegKind::Start, PegKind::Interm, PegKind::End]
    }
}

/// One peg and the disks stacked on it, index 0 at the bottom.
///
/// Invariant: disk sizes strictly decrease from bottom to top
#[derive(Clone, Debug)]
pub struct Peg {
    kind: PegKind,
    disks: Vec<Disk>,
}

impl Peg {
    fn new(kind: PegKind) -> Self {
        Peg {
            kind,
            disks: Vec::new(),
        }
    }

    pub fn kind(&self) -> PegKind {
        self.kind
    }

    /// The disk lying on top, or `None` for an empty peg
    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// The disk at height `level` above the ground, or `None` if the stack
    /// does not reach that high
    pub fn at(&self, level: usize) -> Option<Disk> {
        self.disks.get(level).copied()
    }

    pub fn height(&self) -> usize {
        self.disks.len()
    }

    /// Take the top disk off the peg.
    ///
    /// Panics if the peg is empty; callers must only move disks that exist.
    pub fn pop(&mut self) -> Disk {
        match self.disks.pop() {
            Some(disk) => disk,
            None => panic!("cannot take a disk from the empty {:?} peg", self.kind),
        }
    }

    /// Put a disk on top of the peg.
    ///
    /// Panics unless the disk is smaller than the current top. Whoever picks
    /// a move checks legality against the peg tops first; this is the final
    /// guard.
    pub fn push(&mut self, disk: Disk) {
        if let Some(top) = self.top() {
            assert!(
                top.size() > disk.size(),
                "cannot stack disk {} onto disk {} on the {:?} peg",
                disk.size(),
                top.size(),
                self.kind
            );
        }
        self.disks.push(disk);
    }
}

/// The whole puzzle: three pegs and the disks distributed over them.
///
/// Between moves the disks on the pegs are always exactly one of every size
/// in 1..=N.
#[derive(Clone, Debug)]
pub struct GameState {
    pegs: [Peg; NR_PEGS],
    nr_disks: u8,
}

impl GameState {
    /// Set up a fresh game: all disks on the start peg, largest at the
    /// bottom, the tiny disk on top.
    pub fn new(nr_disks: u8) -> Self {
        assert!(nr_disks > 0, "a game needs at least one disk");

        let mut pegs = PegKind::all().map(Peg::new);
        for size in (1..=nr_disks).rev() {
            pegs[PegKind::Start as usize].push(Disk::new(size));
        }

        GameState { pegs, nr_disks }
    }

    /// Build a game from explicit stacks, given as bottom-to-top sizes per
    /// peg.
    ///
    /// Panics unless every stack decreases and the sizes are exactly 1..=N
    /// for some N, the same shape legal moves keep a real game in.
    pub fn from_layout(layout: [&[u8]; NR_PEGS]) -> Self {
        let mut pegs = PegKind::all().map(Peg::new);
        for (peg, sizes) in pegs.iter_mut().zip(layout) {
            for &size in sizes {
                peg.push(Disk::new(size));
            }
        }

        let mut sizes = layout.concat();
        sizes.sort_unstable();
        let nr_disks = sizes.len();
        assert!(nr_disks > 0, "a game needs at least one disk");
        assert!(
            sizes
                .iter()
                .enumerate()
                .all(|(i, &size)| size as usize == i + 1),
            "disk sizes must be exactly 1..={nr_disks}"
        );

        GameState {
            pegs,
            nr_disks: nr_disks as u8,
        }
    }

    pub fn nr_disks(&self) -> u8 {
        self.nr_disks
    }

    pub fn peg(&self, kind: PegKind) -> &Peg {
        &self.pegs[kind as usize]
    }

    pub fn pegs(&self) -> &[Peg; NR_PEGS] {
        &self.pegs
    }

    /// Move the top disk of one peg onto another.
    ///
    /// No legality check of its own; `Peg::pop` and `Peg::push` are the
    /// guards.
    pub fn move_disk(&mut self, src: PegKind, dst: PegKind) {
        let disk = self.pegs[src as usize].pop();
        self.pegs[dst as usize].push(disk);
    }
}
