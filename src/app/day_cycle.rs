use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug)]
pub struct DayLightSample {
    pub phase: f32,
    pub brightness: f32,
    pub night_alpha: f32,
    pub sky: [f32; 3],
}

impl DayLightSample {
    /// Screen-space sun position: a full arc over the viewport per day.
    pub fn sun_center(&self, w: f32, h: f32) -> (f32, f32) {
        let radius = h * 0.45;
        let x = w * 0.5 + radius * self.phase.sin();
        let y = h * 0.5 - radius * self.phase.cos();
        (x, y)
    }
}

pub struct DayCycle {
    time: f32,
    day_length: f32,
}

impl DayCycle {
    pub fn new(day_length: f32) -> Self {
        Self {
            time: 0.0,
            day_length: day_length.max(1.0),
        }
    }

    pub fn advance(&mut self, dt: f32) -> DayLightSample {
        self.time = (self.time + dt).rem_euclid(self.day_length);
        self.sample()
    }

    pub fn sample(&self) -> DayLightSample {
        let frac = (self.time / self.day_length).rem_euclid(1.0);
        let phase = frac * TAU;
        // Phase 0 is noon: the sun starts overhead and the first half of
        // the cycle slides toward dusk.
        let sky_scale = 0.5 * (1.0 + phase.cos());
        let brightness = sky_scale.powf(1.5);
        let day_sky = [128.0 / 255.0, 198.0 / 255.0, 255.0 / 255.0];
        let night_sky = [10.0 / 255.0, 12.0 / 255.0, 20.0 / 255.0];
        let sky = [
            night_sky[0] + (day_sky[0] - night_sky[0]) * brightness,
            night_sky[1] + (day_sky[1] - night_sky[1]) * brightness,
            night_sky[2] + (day_sky[2] - night_sky[2]) * brightness,
        ];
        DayLightSample {
            phase,
            brightness,
            night_alpha: (1.0 - sky_scale) * 0.5,
            sky,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noon_is_bright_and_clear() {
        let cycle = DayCycle::new(30.0);
        let s = cycle.sample();
        assert!(s.brightness > 0.99);
        assert!(s.night_alpha < 0.01);
    }

    #[test]
    fn midnight_is_dark() {
        let mut cycle = DayCycle::new(30.0);
        let s = cycle.advance(15.0);
        assert!(s.brightness < 0.01);
        assert!((s.night_alpha - 0.5).abs() < 0.01);
    }

    #[test]
    fn cycle_wraps_around() {
        let mut cycle = DayCycle::new(30.0);
        let a = cycle.sample();
        let b = cycle.advance(30.0);
        assert!((a.brightness - b.brightness).abs() < 1e-4);
    }
}
