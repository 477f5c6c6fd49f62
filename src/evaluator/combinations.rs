/// All C(7,5) = 21 ways of choosing five indices out of seven, in lexicographic order.
pub(crate) struct FiveOfSeven {
    indices: [usize; 5],
    remaining: usize,
}

impl FiveOfSeven {
    pub(crate) const COUNT: usize = 21;

    pub(crate) fn new() -> Self {
        Self { indices: [0, 1, 2, 3, 4], remaining: Self::COUNT }
    }
}

impl Iterator for FiveOfSeven {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let out = self.indices;
        self.remaining -= 1;

        // bump the rightmost index that still has room, then pack the rest after it
        if let Some(i) = (0..5).rev().find(|&i| self.indices[i] < 2 + i) {
            self.indices[i] += 1;
            for j in (i + 1)..5 {
                self.indices[j] = self.indices[j - 1] + 1;
            }
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for FiveOfSeven {}
