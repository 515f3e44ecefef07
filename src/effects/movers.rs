use crate::{
    animation::timeline::TargetId,
    foundation::{core::PathStep, math::Rng64},
};

/// Stacking order of the first mover; later movers sit above earlier ones.
pub const MOVER_BASE_Z: i32 = 1000;

/// A transient copy of the cover image placed at one step of the motion path.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Mover {
    pub id: TargetId,
    pub rect: PathStep,
    pub rotation_deg: f64,
    pub z_index: i32,
    pub image: String,
}

/// Movers owned by a single animation run.
///
/// The layer is the only owner of its movers: dropping it (run finished,
/// cancelled, or replaced by a newer run) removes them from the stage.
#[derive(Debug)]
pub struct MoverLayer {
    run_id: u64,
    movers: Vec<Mover>,
}

impl MoverLayer {
    /// One mover per path step, each with a rotation drawn from `[-jitter_deg, jitter_deg)`.
    pub fn spawn(
        run_id: u64,
        path: &[PathStep],
        image: &str,
        rng: &mut Rng64,
        jitter_deg: f64,
    ) -> Self {
        let movers = path
            .iter()
            .enumerate()
            .map(|(i, step)| Mover {
                id: mover_target(i),
                rect: *step,
                rotation_deg: rng.range(-jitter_deg, jitter_deg),
                z_index: MOVER_BASE_Z + i as i32,
                image: image.to_owned(),
            })
            .collect::<Vec<_>>();
        tracing::debug!(run_id, count = movers.len(), "spawned movers");
        Self { run_id, movers }
    }

    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    pub fn movers(&self) -> &[Mover] {
        &self.movers
    }

    pub fn len(&self) -> usize {
        self.movers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movers.is_empty()
    }
}

impl Drop for MoverLayer {
    fn drop(&mut self) {
        if !self.movers.is_empty() {
            tracing::debug!(
                run_id = self.run_id,
                count = self.movers.len(),
                "released movers"
            );
        }
    }
}

pub fn mover_target(index: usize) -> TargetId {
    TargetId::indexed("mover", index)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/movers.rs"]
mod tests;
