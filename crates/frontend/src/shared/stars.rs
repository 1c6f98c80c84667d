use crate::shared::icons::icon;
use leptos::prelude::*;

/// Вид одной звезды в строке рейтинга
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarKind {
    Full,
    Half,
    Empty,
}

impl StarKind {
    fn icon_name(&self) -> &'static str {
        match self {
            StarKind::Full => "star",
            StarKind::Half => "star-half",
            StarKind::Empty => "star-empty",
        }
    }
}

/// Пять звёзд для оценки: целая часть полными, остаток >= 0.5 половинкой
pub fn star_kinds(rating: f64) -> [StarKind; 5] {
    let full = rating.floor().clamp(0.0, 5.0) as usize;
    let has_half = rating.fract() >= 0.5;
    let mut stars = [StarKind::Empty; 5];
    for (i, star) in stars.iter_mut().enumerate() {
        let position = i + 1;
        if position <= full {
            *star = StarKind::Full;
        } else if position == full + 1 && has_half {
            *star = StarKind::Half;
        }
    }
    stars
}

/// Строка из пяти звёзд
#[component]
pub fn StarRow(#[prop(into)] rating: Signal<f64>) -> impl IntoView {
    view! {
        <span class="rating-stars__icons">
            {move || {
                star_kinds(rating.get())
                    .into_iter()
                    .map(|kind| {
                        view! { <span class=format!("star star--{}", kind.icon_name())>{icon(kind.icon_name())}</span> }
                    })
                    .collect_view()
            }}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use StarKind::*;

    #[test]
    fn test_whole_ratings() {
        assert_eq!(star_kinds(5.0), [Full; 5]);
        assert_eq!(star_kinds(3.0), [Full, Full, Full, Empty, Empty]);
        assert_eq!(star_kinds(0.0), [Empty; 5]);
    }

    #[test]
    fn test_half_star() {
        assert_eq!(star_kinds(4.5), [Full, Full, Full, Full, Half]);
        assert_eq!(star_kinds(3.7), [Full, Full, Full, Half, Empty]);
        assert_eq!(star_kinds(3.4), [Full, Full, Full, Empty, Empty]);
    }
}
