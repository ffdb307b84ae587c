/// Per-screen state structs.
///
/// Each struct is recreated with its defaults when the user navigates away;
/// view state never outlives its screen.

use iotab_core::dataset::SECTORS;
use iotab_core::sort::{MultiplierColumn, SortConfig};

#[derive(Debug, Default)]
pub struct HomeState {
    pub selected: usize,
}

/// Cursor-edited text field for the upload path.
///
/// `cursor_pos` counts characters, not bytes, so editing stays safe on
/// non-ASCII paths.
#[derive(Debug, Default)]
pub struct PathInput {
    pub value: String,
    pub cursor_pos: usize,
    pub editing: bool,
}

impl PathInput {
    pub fn start_editing(&mut self) {
        self.editing = true;
        self.cursor_pos = self.char_count();
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of the character at `char_pos`.
    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor_pos);
        self.value.insert(at, c);
        self.cursor_pos += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let at = self.byte_index(self.cursor_pos);
            self.value.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.char_count() {
            let at = self.byte_index(self.cursor_pos);
            self.value.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.char_count() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.char_count();
    }
}

#[derive(Debug, Default)]
pub struct UploadScreenState {
    pub path_input: PathInput,
}

#[derive(Debug, Default)]
pub struct InitialState {
    pub sort: SortConfig<MultiplierColumn>,
}

/// Sector filter of the multiplier screen. Shown in the control panel;
/// the sample figures do not change with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectorFilter {
    #[default]
    All,
    Sector(usize),
}

impl SectorFilter {
    pub fn label(&self) -> &'static str {
        match self {
            SectorFilter::All => "Semua Sektor",
            SectorFilter::Sector(idx) => SECTORS[*idx % SECTORS.len()],
        }
    }

    pub fn cycle(&mut self) {
        *self = match self {
            SectorFilter::All => SectorFilter::Sector(0),
            SectorFilter::Sector(idx) if *idx + 1 < SECTORS.len() => {
                SectorFilter::Sector(*idx + 1)
            }
            SectorFilter::Sector(_) => SectorFilter::All,
        };
    }
}

/// Which multiplier column the multiplier-screen chart draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiplierKind {
    #[default]
    Output,
    Income,
    Employment,
}

impl MultiplierKind {
    pub fn label(&self) -> &'static str {
        match self {
            MultiplierKind::Output => "Output Multiplier",
            MultiplierKind::Income => "Income Multiplier",
            MultiplierKind::Employment => "Employment Multiplier",
        }
    }

    pub fn cycle(&mut self) {
        *self = match self {
            MultiplierKind::Output => MultiplierKind::Income,
            MultiplierKind::Income => MultiplierKind::Employment,
            MultiplierKind::Employment => MultiplierKind::Output,
        };
    }
}

#[derive(Debug, Default)]
pub struct MultiplierState {
    pub sector: SectorFilter,
    pub kind: MultiplierKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShockType {
    #[default]
    Demand,
    Supply,
    Productivity,
    Price,
}

impl ShockType {
    pub fn label(&self) -> &'static str {
        match self {
            ShockType::Demand => "Demand Shock",
            ShockType::Supply => "Supply Shock",
            ShockType::Productivity => "Productivity Shock",
            ShockType::Price => "Price Shock",
        }
    }

    pub fn cycle(&mut self) {
        *self = match self {
            ShockType::Demand => ShockType::Supply,
            ShockType::Supply => ShockType::Productivity,
            ShockType::Productivity => ShockType::Price,
            ShockType::Price => ShockType::Demand,
        };
    }
}

pub const SHOCK_MAGNITUDE_MIN: i32 = -50;
pub const SHOCK_MAGNITUDE_MAX: i32 = 50;
pub const TIME_HORIZON_MIN: u8 = 1;
pub const TIME_HORIZON_MAX: u8 = 10;

/// Shock simulation parameters. None of them feeds any displayed number;
/// the impact views show the sample dataset regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShockParams {
    /// Index into [`SECTORS`].
    pub sector: usize,
    pub shock_type: ShockType,
    /// Percent, clamped to -50..=50.
    pub magnitude: i32,
    /// Years, clamped to 1..=10.
    pub horizon: u8,
}

impl Default for ShockParams {
    fn default() -> Self {
        // Industri, +10%, 5 years
        Self {
            sector: 1,
            shock_type: ShockType::Demand,
            magnitude: 10,
            horizon: 5,
        }
    }
}

impl ShockParams {
    pub fn sector_name(&self) -> &'static str {
        SECTORS[self.sector % SECTORS.len()]
    }

    pub fn cycle_sector(&mut self) {
        self.sector = (self.sector + 1) % SECTORS.len();
    }

    pub fn adjust_magnitude(&mut self, delta: i32) {
        self.magnitude =
            (self.magnitude + delta).clamp(SHOCK_MAGNITUDE_MIN, SHOCK_MAGNITUDE_MAX);
    }

    pub fn adjust_horizon(&mut self, delta: i8) {
        self.horizon = self
            .horizon
            .saturating_add_signed(delta)
            .clamp(TIME_HORIZON_MIN, TIME_HORIZON_MAX);
    }
}

#[derive(Debug, Default)]
pub struct ShockState {
    pub params: ShockParams,
    /// Set by the run action; the impact views render only after a run.
    pub has_run: bool,
}

#[derive(Debug, Default)]
pub struct FinalState {
    pub scroll_offset: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shock_params_clamp() {
        let mut params = ShockParams::default();
        params.adjust_magnitude(100);
        assert_eq!(params.magnitude, SHOCK_MAGNITUDE_MAX);
        params.adjust_magnitude(-500);
        assert_eq!(params.magnitude, SHOCK_MAGNITUDE_MIN);

        params.adjust_horizon(120);
        assert_eq!(params.horizon, TIME_HORIZON_MAX);
        params.adjust_horizon(-120);
        assert_eq!(params.horizon, TIME_HORIZON_MIN);
    }

    #[test]
    fn test_sector_filter_cycles_through_all() {
        let mut filter = SectorFilter::default();
        let mut seen = vec![filter.label()];
        for _ in 0..=SECTORS.len() {
            filter.cycle();
            seen.push(filter.label());
        }
        assert_eq!(filter, SectorFilter::All);
        assert_eq!(seen.first(), seen.last());
        assert_eq!(seen.len(), SECTORS.len() + 2);
    }

    #[test]
    fn test_path_input_editing() {
        let mut input = PathInput::default();
        input.start_editing();
        for c in "tabel.csv".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.value, "tabel.csv");

        input.move_cursor_home();
        input.delete();
        assert_eq!(input.value, "abel.csv");

        input.move_cursor_end();
        input.backspace();
        assert_eq!(input.value, "abel.cs");
    }

    #[test]
    fn test_path_input_handles_multibyte_chars() {
        let mut input = PathInput::default();
        input.start_editing();
        for c in "données/tabel-ekonomi.csv".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.value, "données/tabel-ekonomi.csv");

        // Edit around the accented characters without splitting them.
        input.move_cursor_home();
        input.move_cursor_right();
        input.delete();
        assert_eq!(input.value, "dnnées/tabel-ekonomi.csv");

        input.move_cursor_right();
        input.move_cursor_right();
        input.backspace();
        assert_eq!(input.value, "dnées/tabel-ekonomi.csv");

        input.insert_char('x');
        assert_eq!(input.value, "dnxées/tabel-ekonomi.csv");

        input.move_cursor_end();
        input.backspace();
        assert_eq!(input.value, "dnxées/tabel-ekonomi.cs");
    }
}
