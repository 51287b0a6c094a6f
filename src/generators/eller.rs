use crate::{
    error::MazeError,
    generators::{EllerConfig, seeded_rng},
    maze::Row,
    rng::Arc4Rng,
};

/// Label marking a next-row column that has not inherited a set yet.
const UNSET: usize = usize::MAX;

/// Replace every occurrence of label `a` with `b` over columns `0..=stop`.
///
/// Unoptimized union by relabeling. `stop` bounds the scan to the current
/// pair and the columns the right-to-left pass has not consumed yet.
fn union(sets: &mut [usize], stop: usize, a: usize, b: usize) {
    for s in &mut sets[..=stop] {
        if *s == a {
            *s = b;
        }
    }
}

/// One horizontal pass over adjacent column pairs, right to left.
///
/// A pair whose labels already match is never connected; connecting it
/// would close a loop inside an already-joined group. A `forced` pass skips
/// the wall-keep draw and connects every remaining differing pair.
fn merge_adjacent(
    row: &mut Row,
    sets: &mut [usize],
    rng: &mut Arc4Rng,
    wall_probability: f64,
    forced: bool,
) {
    for i in (0..sets.len() - 1).rev() {
        if sets[i + 1] == sets[i] {
            continue;
        }
        if !forced && rng.random() < wall_probability {
            continue;
        }
        row.cell_mut(i).right = true;
        row.cell_mut(i + 1).left = true;
        let (a, b) = (sets[i], sets[i + 1]);
        union(sets, i, a, b);
    }
}

/// Downward-connection phase between the current row and a fresh one.
///
/// Every set drops into the next row at least once, at a uniformly chosen
/// member column; extra drops follow at an adjusted skip probability that
/// keeps the expected connected fraction at the configured target. Columns
/// of the new row left unconnected open fresh sets, recycling the smallest
/// label ids not already in use.
fn connect_down(
    row: &mut Row,
    sets: &[usize],
    rng: &mut Arc4Rng,
    floor_probability: f64,
) -> (Row, Vec<usize>) {
    let width = sets.len();
    let mut next_row = Row::new(width);
    let mut next_sets = vec![UNSET; width];
    let mut used = vec![false; width];

    // Group columns by label, in order of each label's first appearance.
    let mut groups: Vec<(usize, Vec<usize>)> = Vec::new();
    for (col, &label) in sets.iter().enumerate() {
        match groups.iter_mut().find(|(l, _)| *l == label) {
            Some((_, cols)) => cols.push(col),
            None => groups.push((label, vec![col])),
        }
    }

    for (_, cols) in &groups {
        let pick = (rng.random() * cols.len() as f64) as usize;
        let col = cols[pick];
        row.cell_mut(col).down = true;
        next_row.cell_mut(col).up = true;
        next_sets[col] = sets[col];
        used[sets[col]] = true;
    }

    // Compensate for the mandatory drops already added; the result is the
    // probability of skipping an additional connection.
    let adjusted =
        ((floor_probability * width as f64 - groups.len() as f64) / width as f64).max(0.0);

    for col in (0..width).rev() {
        if !row[col].down && rng.random() >= adjusted {
            row.cell_mut(col).down = true;
            next_row.cell_mut(col).up = true;
            next_sets[col] = sets[col];
            used[sets[col]] = true;
        }
    }

    // Remaining columns start fresh sets; ids are recycled, smallest first.
    let mut id = 0;
    for label in next_sets.iter_mut() {
        if *label != UNSET {
            continue;
        }
        while used[id] {
            id += 1;
        }
        *label = id;
        id += 1;
    }

    (next_row, next_sets)
}

/// Result of one generator step: the completed row and whether it was the
/// terminal one.
#[derive(Debug, Clone)]
pub struct Step {
    pub row: Row,
    pub done: bool,
}

/// Row-by-row Eller maze state machine.
///
/// Each [`step`](Self::step) completes the current row and hands it out;
/// only the live row and its set labels are retained, so memory stays flat
/// no matter how many rows are pulled. A finalized maze keeps returning its
/// last row.
pub struct EllerMaze {
    height: Option<usize>,
    wall_probability: f64,
    floor_probability: f64,
    rng: Arc4Rng,
    row: Row,
    sets: Vec<usize>,
    rows_produced: usize,
    done: bool,
}

impl EllerMaze {
    pub fn new(config: EllerConfig) -> Result<Self, MazeError> {
        if config.width == 0 {
            return Err(MazeError::InvalidWidth);
        }
        Ok(EllerMaze {
            height: config.height,
            wall_probability: config.wall_probability,
            floor_probability: config.floor_probability,
            rng: seeded_rng(config.seed.as_deref()),
            row: Row::new(config.width),
            sets: (0..config.width).collect(),
            rows_produced: 0,
            done: false,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.row.width()
    }

    /// Rows completed so far, the finalized one included.
    pub fn rows_produced(&self) -> usize {
        self.rows_produced
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Produce the next row. `finalize` forces this row to become the
    /// terminal one regardless of the configured height.
    ///
    /// A final row gets a second, unconditional merge pass so that all of
    /// its columns end up in one set; the machine then stays done and
    /// replays that row on every later call.
    pub fn step(&mut self, finalize: bool) -> Step {
        if self.done {
            return Step {
                row: self.row.clone(),
                done: true,
            };
        }

        self.rows_produced += 1;
        let final_row = finalize || self.height.is_some_and(|h| self.rows_produced >= h);

        merge_adjacent(
            &mut self.row,
            &mut self.sets,
            &mut self.rng,
            self.wall_probability,
            false,
        );

        if final_row {
            merge_adjacent(
                &mut self.row,
                &mut self.sets,
                &mut self.rng,
                self.wall_probability,
                true,
            );
            self.done = true;
            return Step {
                row: self.row.clone(),
                done: true,
            };
        }

        let (next_row, next_sets) = connect_down(
            &mut self.row,
            &self.sets,
            &mut self.rng,
            self.floor_probability,
        );
        let completed = std::mem::replace(&mut self.row, next_row);
        self.sets = next_sets;
        Step {
            row: completed,
            done: false,
        }
    }
}

impl Iterator for EllerMaze {
    type Item = Row;

    /// Yields every produced row, the finalized one included, then stops.
    fn next(&mut self) -> Option<Row> {
        if self.done {
            return None;
        }
        Some(self.step(false).row)
    }
}
