//! Ordered set algebra over ascending sequences
//!
//! Every query path funnels its postings through these two merges. Inputs
//! are ascending; `union` tolerates duplicates, `intersection` requires
//! strictly ascending input. Both use linear cursors rather than a heap
//! since the number of merged lists (query terms) is small.

/// Ascending, duplicate-free merge of every value present in any list
pub fn union<T, L>(lists: &[L]) -> Vec<T>
where
    T: Ord + Copy,
    L: AsRef<[T]>,
{
    let lists: Vec<&[T]> = lists
        .iter()
        .map(AsRef::as_ref)
        .filter(|list| !list.is_empty())
        .collect();

    let capacity = lists.iter().map(|list| list.len()).max().unwrap_or(0);
    let mut merged: Vec<T> = Vec::with_capacity(capacity);
    let mut offsets = vec![0usize; lists.len()];

    loop {
        let mut min: Option<(usize, T)> = None;
        for (j, list) in lists.iter().enumerate() {
            if let Some(&head) = list.get(offsets[j]) {
                if min.map_or(true, |(_, value)| head < value) {
                    min = Some((j, head));
                }
            }
        }

        let Some((j, value)) = min else {
            break;
        };

        if merged.last().map_or(true, |last| *last < value) {
            merged.push(value);
        }
        offsets[j] += 1;
    }

    merged
}

/// Ascending sequence of the values present in every list
///
/// The shortest list drives the scan; every other list keeps a cursor that
/// only moves forward.
pub fn intersection<T, L>(lists: &[L]) -> Vec<T>
where
    T: Ord + Copy,
    L: AsRef<[T]>,
{
    let lists: Vec<&[T]> = lists.iter().map(AsRef::as_ref).collect();
    let Some(driver) = (0..lists.len()).min_by_key(|&j| lists[j].len()) else {
        return Vec::new();
    };

    let mut result = Vec::new();
    let mut offsets = vec![0usize; lists.len()];

    'values: for &value in lists[driver] {
        for (j, list) in lists.iter().enumerate() {
            if j == driver {
                continue;
            }

            let cursor = &mut offsets[j];
            while *cursor < list.len() && list[*cursor] < value {
                *cursor += 1;
            }

            match list.get(*cursor) {
                // exhausted: nothing later in the driver can match either
                None => break 'values,
                Some(head) if *head != value => continue 'values,
                Some(_) => {}
            }
        }

        result.push(value);
    }

    result
}
