use crate::domain::Field;

/// Out-of-domain lookup. Returns `Some` when `cell` falls outside the
/// field, `None` when the field itself holds the value.
pub trait BcCheck: Sync {
    fn check(&self, cell: i32) -> Option<f64>;
}

/// Dirichlet boundary: a fixed value everywhere past either end.
pub struct ConstantCheck {
    value: f64,
    n: i32,
}

impl ConstantCheck {
    pub fn new(value: f64, n: usize) -> Self {
        ConstantCheck {
            value,
            n: n as i32,
        }
    }
}

impl BcCheck for ConstantCheck {
    fn check(&self, cell: i32) -> Option<f64> {
        if cell < 0 || cell >= self.n {
            return Some(self.value);
        }
        None
    }
}

/// Wraparound boundary reading from the current input field.
/// Assumes coords are no more than one domain length away.
pub struct PeriodicCheck<'a> {
    field: &'a Field,
}

impl<'a> PeriodicCheck<'a> {
    pub fn new(field: &'a Field) -> Self {
        PeriodicCheck { field }
    }
}

impl BcCheck for PeriodicCheck<'_> {
    fn check(&self, cell: i32) -> Option<f64> {
        let n = self.field.len() as i32;
        let wrapped = cell.rem_euclid(n);
        if wrapped != cell {
            return Some(self.field.view(wrapped));
        }
        None
    }
}
