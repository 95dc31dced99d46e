//! MPDATA: iterated donor-cell upwind with antidiffusive velocity
//! corrections (Smolarkiewicz). Heterogeneous diffusion enters as a
//! pseudo-velocity on the faces, so one upwind pass per iteration covers
//! both transport and Fickian diffusion.
//!
//! Layout: the scalar field carries a one-cell halo on each side; the
//! advector lives on the `n + 1` faces as Courant numbers `u·dt/dx`.
//! Face `f` sits between cells `f - 1` and `f`.

use anyhow::{anyhow, Result};

/// Scheme options: iteration count and the division guard for the
/// antidiffusive velocity.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Total passes per step: one upwind plus `n_iters - 1` corrections.
    pub n_iters: usize,
    pub epsilon: f64,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            n_iters: 2,
            epsilon: 1e-15,
        }
    }
}

/// Halo fill for the advectee.
#[derive(Debug, Clone, Copy)]
pub enum Boundary {
    Constant(f64),
    Periodic,
}

pub struct MpdataSolver {
    options: Options,
    boundary: Boundary,
    n: usize,
    /// Advectee with one halo cell per side; interior is `1..=n`.
    psi: Vec<f64>,
    psi_next: Vec<f64>,
    /// Physical Courant numbers per face.
    advector: Vec<f64>,
    /// Per-cell diffusivity for the pseudo-velocity.
    diffusivity: Vec<f64>,
    /// Velocity used by the current pass, physical plus pseudo.
    total_velocity: Vec<f64>,
    corrected_velocity: Vec<f64>,
}

impl MpdataSolver {
    pub fn new(
        options: Options,
        advectee: &[f64],
        advector: &[f64],
        diffusivity: &[f64],
        boundary: Boundary,
    ) -> Result<Self> {
        let n = advectee.len();
        if n < 2 {
            return Err(anyhow!("need at least 2 cells (got {})", n));
        }
        if advector.len() != n + 1 {
            return Err(anyhow!(
                "advector must have {} faces (got {})",
                n + 1,
                advector.len()
            ));
        }
        if diffusivity.len() != n {
            return Err(anyhow!(
                "diffusivity must have {} cells (got {})",
                n,
                diffusivity.len()
            ));
        }
        if options.n_iters == 0 {
            return Err(anyhow!("n_iters must be at least 1"));
        }
        let mut psi = vec![0.0; n + 2];
        psi[1..=n].copy_from_slice(advectee);
        Ok(MpdataSolver {
            options,
            boundary,
            n,
            psi_next: psi.clone(),
            psi,
            advector: advector.to_vec(),
            diffusivity: diffusivity.to_vec(),
            total_velocity: vec![0.0; n + 1],
            corrected_velocity: vec![0.0; n + 1],
        })
    }

    /// Interior cells, without the halo.
    pub fn advectee(&self) -> &[f64] {
        &self.psi[1..=self.n]
    }

    pub fn total_mass(&self) -> f64 {
        self.advectee().iter().sum()
    }

    fn fill_halo(&mut self) {
        match self.boundary {
            Boundary::Constant(value) => {
                self.psi[0] = value;
                self.psi[self.n + 1] = value;
            }
            Boundary::Periodic => {
                self.psi[0] = self.psi[self.n];
                self.psi[self.n + 1] = self.psi[1];
            }
        }
    }

    /// Diffusivity at face `f`, clamped to the edge cell at the domain
    /// boundary (periodic runs wrap instead).
    fn face_diffusivity(&self, f: usize) -> f64 {
        let d = &self.diffusivity;
        if f == 0 {
            match self.boundary {
                Boundary::Periodic => 0.5 * (d[self.n - 1] + d[0]),
                Boundary::Constant(_) => d[0],
            }
        } else if f == self.n {
            match self.boundary {
                Boundary::Periodic => 0.5 * (d[self.n - 1] + d[0]),
                Boundary::Constant(_) => d[self.n - 1],
            }
        } else {
            0.5 * (d[f - 1] + d[f])
        }
    }

    /// Donor-cell flux through a face with Courant number `c`.
    fn flux(c: f64, left: f64, right: f64) -> f64 {
        c.max(0.0) * left + c.min(0.0) * right
    }

    /// One upwind pass over the interior using `velocity`.
    fn upwind_pass(&mut self, velocity: &[f64]) {
        for i in 0..self.n {
            let f_left = Self::flux(velocity[i], self.psi[i], self.psi[i + 1]);
            let f_right = Self::flux(velocity[i + 1], self.psi[i + 1], self.psi[i + 2]);
            self.psi_next[i + 1] = self.psi[i + 1] - (f_right - f_left);
        }
        std::mem::swap(&mut self.psi, &mut self.psi_next);
    }

    /// Advance one time step. `mu_coeff` scales the per-face diffusivity
    /// into a dimensionless diffusion number; pass `dt/dx²` to integrate
    /// the physical equation, or 0 for pure advection. Stability needs
    /// every face's Courant number within ±1; a step outside that bound
    /// still runs, it just amplifies instead of diffusing.
    pub fn step(&mut self, mu_coeff: f64) {
        let eps = self.options.epsilon;

        // First pass: physical advector plus diffusive pseudo-velocity.
        self.fill_halo();
        for f in 0..=self.n {
            let left = self.psi[f];
            let right = self.psi[f + 1];
            let mut c = self.advector[f];
            if mu_coeff != 0.0 {
                let mu = mu_coeff * self.face_diffusivity(f);
                c += -2.0 * mu * (right - left) / (right + left + eps);
            }
            self.total_velocity[f] = c;
        }
        let velocity = std::mem::take(&mut self.total_velocity);
        self.upwind_pass(&velocity);
        self.total_velocity = velocity;

        // Corrective passes: antidiffusive velocity from the previous
        // pass's velocity and the updated field.
        for _ in 1..self.options.n_iters {
            self.fill_halo();
            for f in 0..=self.n {
                let left = self.psi[f];
                let right = self.psi[f + 1];
                let c = self.total_velocity[f];
                self.corrected_velocity[f] =
                    (c.abs() - c * c) * (right - left) / (right + left + eps);
            }
            let velocity = std::mem::take(&mut self.corrected_velocity);
            self.upwind_pass(&velocity);
            self.corrected_velocity = velocity;
            self.total_velocity
                .copy_from_slice(&self.corrected_velocity);
        }
    }

    /// Advance `n_steps`, handing each post-step state to `record`.
    pub fn advance<F: FnMut(usize, &[f64])>(
        &mut self,
        n_steps: usize,
        mu_coeff: f64,
        mut record: F,
    ) {
        for step in 1..=n_steps {
            self.step(mu_coeff);
            record(step, &self.psi[1..=self.n]);
        }
    }
}
