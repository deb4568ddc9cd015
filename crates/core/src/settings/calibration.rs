//! Touchscreen calibration payload
//!
//! Seven fixed-point coefficients mapping digitizer readings to screen
//! coordinates:
//!
//! ```text
//! x = (a * raw_x + b * raw_y + c) / k
//! y = (d * raw_x + e * raw_y + f) / k
//! ```
//!
//! The settings store only checks the sentinel stored next to it.

/// Serialized size in bytes
pub const CALIBRATION_SIZE: usize = 28;

/// A raw digitizer reading or a display coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationPoint {
    pub x: i32,
    pub y: i32,
}

impl CalibrationPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Digitizer readings taken on a reference unit
const REFERENCE_DIGITIZER: [CalibrationPoint; 3] = [
    CalibrationPoint::new(256, 731),
    CalibrationPoint::new(880, 265),
    CalibrationPoint::new(501, 100),
];

/// Display targets touched for [`REFERENCE_DIGITIZER`]
const REFERENCE_DISPLAY: [CalibrationPoint; 3] = [
    CalibrationPoint::new(32, 48),
    CalibrationPoint::new(208, 168),
    CalibrationPoint::new(120, 288),
];

/// Touch calibration coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchCalibration {
    pub a: i32,
    pub b: i32,
    pub c: i32,
    pub d: i32,
    pub e: i32,
    pub f: i32,
    pub k: i32,
}

impl TouchCalibration {
    /// Factory calibration, derived from the reference unit's points
    pub const NOMINAL: Self = Self::from_points(&REFERENCE_DIGITIZER, &REFERENCE_DISPLAY);

    /// Solve the affine mapping that takes each digitizer point `s[i]` to
    /// the display point `d[i]`
    ///
    /// Evaluated in a const context an overflowing point set fails to
    /// compile.
    pub const fn from_points(s: &[CalibrationPoint; 3], d: &[CalibrationPoint; 3]) -> Self {
        Self {
            a: (d[0].x - d[2].x) * (s[1].y - s[2].y) - (d[1].x - d[2].x) * (s[0].y - s[2].y),
            b: (s[0].x - s[2].x) * (d[1].x - d[2].x) - (d[0].x - d[2].x) * (s[1].x - s[2].x),
            c: s[0].y * (s[2].x * d[1].x - s[1].x * d[2].x)
                + s[1].y * (s[0].x * d[2].x - s[2].x * d[0].x)
                + s[2].y * (s[1].x * d[0].x - s[0].x * d[1].x),
            d: (d[0].y - d[2].y) * (s[1].y - s[2].y) - (d[1].y - d[2].y) * (s[0].y - s[2].y),
            e: (s[0].x - s[2].x) * (d[1].y - d[2].y) - (d[0].y - d[2].y) * (s[1].x - s[2].x),
            f: s[0].y * (s[2].x * d[1].y - s[1].x * d[2].y)
                + s[1].y * (s[0].x * d[2].y - s[2].x * d[0].y)
                + s[2].y * (s[1].x * d[0].y - s[0].x * d[1].y),
            k: (s[0].x - s[2].x) * (s[1].y - s[2].y) - (s[1].x - s[2].x) * (s[0].y - s[2].y),
        }
    }

    /// Map a raw digitizer reading to display coordinates
    ///
    /// Returns `None` for a degenerate calibration (`k == 0`).
    pub fn translate(&self, raw: CalibrationPoint) -> Option<CalibrationPoint> {
        if self.k == 0 {
            return None;
        }
        let k = i64::from(self.k);
        let (x, y) = (i64::from(raw.x), i64::from(raw.y));
        let px = (i64::from(self.a) * x + i64::from(self.b) * y + i64::from(self.c)) / k;
        let py = (i64::from(self.d) * x + i64::from(self.e) * y + i64::from(self.f)) / k;
        Some(CalibrationPoint::new(
            i32::try_from(px).ok()?,
            i32::try_from(py).ok()?,
        ))
    }

    fn coefficients(&self) -> [i32; 7] {
        [self.a, self.b, self.c, self.d, self.e, self.f, self.k]
    }

    /// Serialize coefficients in declaration order (little-endian)
    pub fn to_bytes(&self) -> [u8; CALIBRATION_SIZE] {
        let mut buf = [0u8; CALIBRATION_SIZE];
        for (chunk, value) in buf.chunks_exact_mut(4).zip(self.coefficients()) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        buf
    }

    /// Deserialize coefficients (little-endian)
    pub fn from_bytes(buf: &[u8]) -> Option<Self> {
        if buf.len() < CALIBRATION_SIZE {
            return None;
        }

        let mut values = [0i32; 7];
        for (value, chunk) in values.iter_mut().zip(buf.chunks_exact(4)) {
            *value = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        let [a, b, c, d, e, f, k] = values;
        Some(Self { a, b, c, d, e, f, k })
    }
}

impl Default for TouchCalibration {
    fn default() -> Self {
        Self::NOMINAL
    }
}
