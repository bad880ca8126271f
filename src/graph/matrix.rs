/// Dense square matrix stored row-major in a flat `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    size: usize,
}

impl<T: Clone> Matrix<T> {
    pub fn new(size: usize, init: T) -> Self {
        Self {
            data: vec![init; size * size],
            size,
        }
    }
}

impl<T> Matrix<T> {
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.size && col < self.size {
            self.data.get(row * self.size + col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.size && col < self.size {
            self.data.get_mut(row * self.size + col)
        } else {
            None
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}
