//! Explanatory text shown next to the plots.

/// A titled paragraph.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    pub body: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section {
        title: "Effect of Wave Speed on Amplitude vs Time Graph",
        body: "The wave speed (c) affects how quickly the seismic waves travel through the \
               structure. Increasing the wave speed will lead to more rapid vibrations and \
               potentially more damage to the structure. This can be observed in the graph as \
               an increase in the frequency of the waves.",
    },
    Section {
        title: "Effect of Stiffness on Amplitude vs Time Graph",
        body: "The stiffness (k) of a structure determines how resistant it is to deformation. \
               Increasing the stiffness will make the structure vibrate less when subjected to \
               seismic waves. However, increasing the stiffness also increases the natural \
               frequency of the structure, which can make it more susceptible to resonance with \
               certain frequencies of seismic waves. This can be observed in the graph as an \
               increase in the amplitude of the waves at certain frequencies.",
    },
    Section {
        title: "Effect of Damping on Amplitude vs Time Graph",
        body: "Damping is a technique used to reduce the amplitude of vibrations in a structure. \
               In the context of earthquake wave propagation, damping can be used to reduce the \
               effects of seismic waves on the structure. The damping ratio determines how \
               quickly the amplitude of the waves decays over time. Increasing the damping ratio \
               will lead to a faster decay of the waves, which can be observed in the graph as a \
               decrease in the amplitude of the waves over time.",
    },
    Section {
        title: "Effect of Changing Two Properties at Once on Amplitude vs Time Graph",
        body: "Changing two properties at once can have complex effects on the amplitude vs time \
               graph. For example, increasing both the wave speed and stiffness can lead to more \
               rapid vibrations, but also increase the natural frequency of the structure, \
               potentially leading to resonance. Increasing the damping ratio can help mitigate \
               the effects of seismic waves, but may also reduce the overall response of the \
               structure.",
    },
    Section {
        title: "Demonstration",
        body: "Use the inputs to adjust the wave speed, stiffness, damping ratio, and other \
               properties to see how they affect the amplitude vs time graph.",
    },
];

/// Axis labels shared by both plots.
pub const X_AXIS_LABEL: &str = "Time (s)";
pub const Y_AXIS_LABEL: &str = "Amplitude";
