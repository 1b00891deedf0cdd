use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Completed,
}

// Direction the next sort uses, shared by every column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Fifteen,
    TwentyFive,
    Fifty,
    SeventyFive,
    Hundred,
}

impl PageSize {
    pub const DEFAULT: PageSize = PageSize::Fifteen;

    // The initial 15 is not offered again.
    pub const CHOICES: [PageSize; 4] = [
        PageSize::TwentyFive,
        PageSize::Fifty,
        PageSize::SeventyFive,
        PageSize::Hundred,
    ];

    pub fn get(self) -> usize {
        match self {
            PageSize::Fifteen => 15,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::SeventyFive => 75,
            PageSize::Hundred => 100,
        }
    }
}

// 1-based page, clamped to `0..len`.
pub fn page_window(len: usize, page: usize, per_page: usize) -> Range<usize> {
    let last = page.saturating_mul(per_page);
    let first = last.saturating_sub(per_page);
    first.min(len)..last.min(len)
}

pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

pub fn clamp_page(page: usize, len: usize, per_page: usize) -> usize {
    page.clamp(1, total_pages(len, per_page).max(1))
}
