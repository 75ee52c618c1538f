use pad::PadStr;

/// Plain text table with a header row, cells padded to the widest value.
pub struct Table {
    ncol: usize,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn with_capacity(size: usize) -> Table {
        Table {
            ncol: 0,
            rows: Vec::with_capacity(size),
        }
    }

    pub fn add(&mut self, mut row: Vec<String>) {
        if self.ncol == 0 {
            self.ncol = row.len();
        }
        row.resize(self.ncol, String::new());
        self.rows.push(row);
    }

    pub fn render(self) -> String {
        let mut pads = vec![0; self.ncol];
        for row in self.rows.iter() {
            for (coli, cell) in row.iter().enumerate() {
                let size = console::measure_text_width(cell);
                if size > pads[coli] {
                    pads[coli] = size;
                }
            }
        }

        let mut split = String::from("+");
        for pad in pads.iter() {
            split.push_str(&"-".repeat(*pad + 2));
            split.push('+');
        }

        let mut out = String::new();
        for (rowi, row) in self.rows.into_iter().enumerate() {
            if rowi == 0 {
                out.push_str(&split);
                out.push('\n');
            }
            out.push('|');
            for (coli, cell) in row.into_iter().enumerate() {
                let text = cell.pad_to_width_with_alignment(pads[coli], pad::Alignment::Left);
                out.push_str(&format!(" {text} |"));
            }
            out.push('\n');

            if rowi == 0 {
                out.push_str(&split);
                out.push('\n');
            }
        }
        out.push_str(&split);
        out
    }
}
