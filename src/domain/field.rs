use rayon::prelude::*;

/// Owned 1-D cell buffer. Cells are addressed by signed index so that
/// stencil offsets can reach past either end and get routed through a
/// boundary check.
pub struct Field {
    buffer: Vec<f64>,
}

impl Field {
    pub fn new(n: usize) -> Self {
        Field {
            buffer: vec![0.0; n],
        }
    }

    pub fn from_value(n: usize, value: f64) -> Self {
        Field {
            buffer: vec![value; n],
        }
    }

    pub fn from_slice(values: &[f64]) -> Self {
        Field {
            buffer: values.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [f64] {
        &mut self.buffer
    }

    #[track_caller]
    pub fn view(&self, cell: i32) -> f64 {
        debug_assert!(
            cell >= 0 && (cell as usize) < self.buffer.len(),
            "cell {} outside 0..{}",
            cell,
            self.buffer.len()
        );
        self.buffer[cell as usize]
    }

    pub fn par_modify_access(
        &mut self,
        chunk_size: usize,
    ) -> impl ParallelIterator<Item = FieldChunk<'_>> {
        self.buffer
            .par_chunks_mut(chunk_size)
            .enumerate()
            .map(move |(i, buffer_chunk)| FieldChunk::new(i * chunk_size, buffer_chunk))
    }

    pub fn par_set_values<F: Fn(usize) -> f64 + Send + Sync>(&mut self, f: F, chunk_size: usize) {
        self.par_modify_access(chunk_size).for_each(|mut chunk| {
            chunk.coord_iter_mut().for_each(|(cell, value_mut)| {
                *value_mut = f(cell);
            })
        });
    }
}

/// A contiguous run of cells handed to one rayon task, remembering where
/// it sits in the full buffer.
pub struct FieldChunk<'a> {
    offset: usize,
    buffer: &'a mut [f64],
}

impl<'a> FieldChunk<'a> {
    pub fn new(offset: usize, buffer: &'a mut [f64]) -> Self {
        FieldChunk { offset, buffer }
    }

    pub fn coord_iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut f64)> {
        let offset = self.offset;
        self.buffer
            .iter_mut()
            .enumerate()
            .map(move |(i, v)| (offset + i, v))
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    fn mock_solver(input: &mut Field, output: &mut Field) {
        std::mem::swap(input, output);
    }

    #[test]
    fn swap_test() {
        let mut a = Field::new(2);
        let mut b = Field::new(2);
        let a_ptr = a.buffer().as_ptr();
        let b_ptr = b.buffer().as_ptr();
        mock_solver(&mut a, &mut b);
        let sa_ptr = a.buffer().as_ptr();
        let sb_ptr = b.buffer().as_ptr();
        assert_eq!(a_ptr, sb_ptr);
        assert_eq!(b_ptr, sa_ptr);
    }

    #[test]
    fn par_set_values_covers_all_cells() {
        for chunk_size in [1, 3, 100] {
            let mut field = Field::new(10);
            field.par_set_values(|cell| cell as f64, chunk_size);
            for i in 0..10 {
                assert_approx_eq!(f64, field.view(i as i32), i as f64);
            }
        }
    }
}
