//! Клиентская пагинация уже загруженной коллекции.

/// Количество постов на странице.
pub const PAGE_SIZE: usize = 4;

/// Количество страниц: `ceil(total / PAGE_SIZE)`.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// Приводит номер страницы к диапазону `[1, max(1, page_count)]`.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, page_count(total).max(1))
}

/// Срез элементов для страницы с номером `page` (нумерация с 1).
///
/// Для страниц за пределами коллекции возвращает пустой срез.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(PAGE_SIZE))
    else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(4), 1);
        assert_eq!(page_count(5), 2);
        assert_eq!(page_count(8), 2);
        assert_eq!(page_count(9), 3);
    }

    #[test]
    fn clamp_page_keeps_at_least_first_page() {
        assert_eq!(clamp_page(0, 0), 1);
        assert_eq!(clamp_page(3, 0), 1);
        assert_eq!(clamp_page(0, 10), 1);
    }

    #[test]
    fn clamp_page_caps_at_last_page() {
        assert_eq!(clamp_page(2, 5), 2);
        assert_eq!(clamp_page(2, 4), 1);
        assert_eq!(clamp_page(7, 9), 3);
    }

    #[test]
    fn five_items_split_into_four_and_one() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(page_slice(&items, 1), &[1, 2, 3, 4]);
        assert_eq!(page_slice(&items, 2), &[5]);
        assert!(page_slice(&items, 3).is_empty());
    }

    #[test]
    fn page_zero_is_empty() {
        let items = [1, 2];
        assert!(page_slice(&items, 0).is_empty());
    }

    #[test]
    fn page_past_usize_range_is_empty() {
        let items = [1, 2, 3];
        assert!(page_slice(&items, usize::MAX).is_empty());
        assert!(page_slice(&items, usize::MAX / PAGE_SIZE + 2).is_empty());
    }
}
