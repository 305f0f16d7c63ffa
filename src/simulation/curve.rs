use strum_macros::{EnumCount, EnumIter};

/*
== Curves the viewer can draw =================================================
*/

// Checkboxes and the legend in the UI are automatically populated with these options
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, EnumCount, EnumIter)]
pub enum Curve {
    Envelope,     // single slit diffraction
    Interference, // two slit superposition
    Intensity,    // envelope * interference
}

impl Curve {
    pub fn properties(&self) -> CurveProperties {
        match self {
            Curve::Envelope => CurveProperties {
                name: "Envelope",
                description: "Single slit diffraction envelope, (sin α / α)²",
                colour: (255, 175, 0),
            },
            Curve::Interference => CurveProperties {
                name: "Interference",
                description: "Two slit interference, cos²(φ/2)",
                colour: (20, 100, 255),
            },
            Curve::Intensity => CurveProperties {
                name: "Intensity",
                description: "Relative intensity on the screen",
                colour: (180, 20, 180),
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.properties().name
    }

    pub fn colour(&self) -> (u8, u8, u8) {
        self.properties().colour
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

pub struct CurveProperties {
    pub name: &'static str,
    pub description: &'static str,
    pub colour: (u8, u8, u8), // RGB
}
