#[macro_export]
macro_rules! ok_or_continue {
    ( $e:expr ) => {
        match $e {
            Ok(value) => value,
            Err(_e) => {
                continue;
            }
        }
    };
}

/// A fixed-size, row-major 2D array
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Array2d<T: Default + Copy> {
    width: usize,
    height: usize,
    vec: Vec<T>,
}

impl<T: Default + Copy> Array2d<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            vec: vec![T::default(); width * height],
        }
    }

    /// Returns the value at the given position, or `None` if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x < self.width && y < self.height {
            Some(self.vec[y * self.width + x])
        } else {
            None
        }
    }

    /// Sets the value at the given position. Returns `None` if out of bounds
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Option<()> {
        if x < self.width && y < self.height {
            self.vec[y * self.width + x] = value;
            Some(())
        } else {
            None
        }
    }

    pub fn fill(&mut self, value: T) {
        self.vec.iter_mut().for_each(|cell| *cell = value);
    }
}
