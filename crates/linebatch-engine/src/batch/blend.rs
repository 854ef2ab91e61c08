/// Blend mode of a UI batch.
///
/// Batches only merge when their blend modes are equal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum BlendMode {
    #[default]
    Replace,
    Add,
    Multiply,
    Alpha,
    AddAlpha,
    PremulAlpha,
    InvDestAlpha,
    Subtract,
    SubtractAlpha,
}

impl BlendMode {
    pub const ALL: [BlendMode; 9] = [
        BlendMode::Replace,
        BlendMode::Add,
        BlendMode::Multiply,
        BlendMode::Alpha,
        BlendMode::AddAlpha,
        BlendMode::PremulAlpha,
        BlendMode::InvDestAlpha,
        BlendMode::Subtract,
        BlendMode::SubtractAlpha,
    ];

    /// Fixed-function blend state a renderer should bind for this mode.
    pub fn blend_state(self) -> wgpu::BlendState {
        use wgpu::BlendFactor as F;
        use wgpu::BlendOperation as Op;

        let (src, dst, op) = match self {
            BlendMode::Replace => (F::One, F::Zero, Op::Add),
            BlendMode::Add => (F::One, F::One, Op::Add),
            BlendMode::Multiply => (F::Dst, F::Zero, Op::Add),
            BlendMode::Alpha => (F::SrcAlpha, F::OneMinusSrcAlpha, Op::Add),
            BlendMode::AddAlpha => (F::SrcAlpha, F::One, Op::Add),
            BlendMode::PremulAlpha => (F::One, F::OneMinusSrcAlpha, Op::Add),
            BlendMode::InvDestAlpha => (F::OneMinusDstAlpha, F::DstAlpha, Op::Add),
            BlendMode::Subtract => (F::One, F::One, Op::ReverseSubtract),
            BlendMode::SubtractAlpha => (F::SrcAlpha, F::One, Op::ReverseSubtract),
        };

        let component = wgpu::BlendComponent {
            src_factor: src,
            dst_factor: dst,
            operation: op,
        };
        wgpu::BlendState { color: component, alpha: component }
    }

    /// Stable lowercase name, handy for logs and config files.
    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Replace => "replace",
            BlendMode::Add => "add",
            BlendMode::Multiply => "multiply",
            BlendMode::Alpha => "alpha",
            BlendMode::AddAlpha => "addalpha",
            BlendMode::PremulAlpha => "premulalpha",
            BlendMode::InvDestAlpha => "invdestalpha",
            BlendMode::Subtract => "subtract",
            BlendMode::SubtractAlpha => "subtractalpha",
        }
    }
}
