use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// First pointer touched down.
    Down,
    /// Any active pointer moved.
    Move,
    /// Last pointer lifted.
    Up,
    /// An additional pointer touched down.
    PointerDown,
    /// A non-last pointer lifted.
    PointerUp,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub id: u64,
    pub pos: egui::Pos2,
}

impl PointerSample {
    pub fn new(id: u64, pos: egui::Pos2) -> Self {
        Self { id, pos }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub pointers: Vec<PointerSample>,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, pointers: Vec<PointerSample>) -> Self {
        Self { phase, pointers }
    }

    pub fn single(phase: PointerPhase, pos: egui::Pos2) -> Self {
        Self::new(phase, vec![PointerSample::new(0, pos)])
    }

    pub fn pair(phase: PointerPhase, first: egui::Pos2, second: egui::Pos2) -> Self {
        Self::new(
            phase,
            vec![PointerSample::new(0, first), PointerSample::new(1, second)],
        )
    }

    pub fn primary(&self) -> Option<egui::Pos2> {
        self.pointers.first().map(|sample| sample.pos)
    }

    /// On-screen distance between the first two pointers.
    pub fn separation(&self) -> Option<f32> {
        let [first, second] = self.pointers.get(..2)? else {
            return None;
        };
        Some((second.pos - first.pos).length())
    }

    /// Screen-space midpoint of the first two pointers.
    pub fn midpoint(&self) -> Option<egui::Pos2> {
        let [first, second] = self.pointers.get(..2)? else {
            return None;
        };
        Some(egui::pos2(
            (first.pos.x + second.pos.x) / 2.0,
            (first.pos.y + second.pos.y) / 2.0,
        ))
    }
}
