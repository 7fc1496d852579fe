//! Scanline worker pool.

use crossbeam_channel::unbounded;
use rand::SeedableRng;
use rand::rngs::StdRng;

use lumen_core::{Camera, Color, Film, Scene};
use lumen_host::{RenderError, RenderSettings};

use crate::integrator::render_pixel;

/// Picks the worker count: capped by the settings, leaving one core free
/// for the host when more than one is available.
fn worker_count(settings: &RenderSettings) -> usize {
    let available = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let mut count = if settings.threads > 0 {
        settings.threads.min(available)
    } else {
        available
    };
    if count > 1 {
        count -= 1;
    }
    count
}

/// Renders the scene in parallel, one scanline per work item.
pub(crate) fn render(
    scene: &Scene,
    camera: &Camera,
    settings: &RenderSettings,
) -> Result<Film, RenderError> {
    let resolution = camera.resolution();
    let workers = worker_count(settings);

    tracing::debug!(
        width = resolution.width,
        height = resolution.height,
        workers,
        "starting scanline render"
    );

    let (row_tx, row_rx) = unbounded::<u32>();
    let (result_tx, result_rx) = unbounded::<(u32, Vec<Color>)>();

    for y in 0..resolution.height {
        // Unbounded channel; sending every scanline up front cannot block.
        let _ = row_tx.send(y);
    }
    drop(row_tx);

    let mut film = Film::new(resolution);

    std::thread::scope(|scope| {
        for _ in 0..workers {
            let row_rx = row_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                let mut rng = StdRng::from_entropy();
                while let Ok(y) = row_rx.recv() {
                    let mut row = Vec::with_capacity(resolution.width as usize);
                    for x in 0..resolution.width {
                        row.push(render_pixel(
                            scene,
                            camera,
                            x,
                            y,
                            settings.samples,
                            settings.max_bounces,
                            &mut rng,
                        ));
                    }
                    if result_tx.send((y, row)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(result_tx);

        for _ in 0..resolution.height {
            let (y, row) = result_rx.recv().map_err(|_| RenderError::WorkerLost)?;
            for (x, color) in row.into_iter().enumerate() {
                film.set_pixel(x as u32, y, color);
            }
        }
        Ok(())
    })?;

    Ok(film)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use glam::Vec3;

    use lumen_core::{Emissive, Resolution, Sphere};

    #[test]
    fn test_every_pixel_is_written() {
        let scene = Scene::new();
        let camera = Camera::new(Resolution::new(16, 12), Vec3::ZERO, Vec3::X, 50.0, 18.0);
        let settings = RenderSettings {
            samples: 1,
            max_bounces: 4,
            threads: 2,
        };

        let film = render(&scene, &camera, &settings).unwrap();
        for y in 0..12 {
            for x in 0..16 {
                // Background alpha is 1.0, so an untouched pixel (alpha 0)
                // would mean a dropped scanline.
                assert_eq!(film.pixel(x, y).unwrap()[3], 255);
            }
        }
    }

    #[test]
    fn test_single_thread_matches_expected_emitter() {
        let mut scene = Scene::new();
        scene.add_object(Box::new(Sphere::new(
            Vec3::new(2.0, 0.0, 0.0),
            1.5,
            Arc::new(Emissive::new(Color::new(0.0, 1.0, 0.0, 1.0), 1.0)),
        )));
        let camera = Camera::new(Resolution::new(4, 4), Vec3::ZERO, Vec3::X, 50.0, 18.0);
        let settings = RenderSettings {
            samples: 4,
            max_bounces: 4,
            threads: 1,
        };

        let film = render(&scene, &camera, &settings).unwrap();
        assert_eq!(film.pixel(2, 2), Some([0, 255, 0, 255]));
    }
}
