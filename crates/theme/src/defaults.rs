//! 默认主题表（Tailwind v3 默认值的子集）
//!
//! 每个分类一张有序表，`ThemeTable::defaults()` 按声明顺序展开。
//! 嵌套分类已压平为 `red-500` 形式的键。

use phf::phf_ordered_map;

type ThemeMap = phf::OrderedMap<&'static str, &'static str>;

/// `colors`
pub static COLORS: ThemeMap = phf_ordered_map! {
    "black" => "#000",
    "white" => "#fff",
    "transparent" => "transparent",
    "current" => "currentColor",

    // Slate
    "slate-50" => "#f8fafc",
    "slate-100" => "#f1f5f9",
    "slate-200" => "#e2e8f0",
    "slate-300" => "#cbd5e1",
    "slate-400" => "#94a3b8",
    "slate-500" => "#64748b",
    "slate-600" => "#475569",
    "slate-700" => "#334155",
    "slate-800" => "#1e293b",
    "slate-900" => "#0f172a",
    "slate-950" => "#020617",

    // Gray
    "gray-50" => "#f9fafb",
    "gray-100" => "#f3f4f6",
    "gray-200" => "#e5e7eb",
    "gray-300" => "#d1d5db",
    "gray-400" => "#9ca3af",
    "gray-500" => "#6b7280",
    "gray-600" => "#4b5563",
    "gray-700" => "#374151",
    "gray-800" => "#1f2937",
    "gray-900" => "#111827",
    "gray-950" => "#030712",

    // Zinc
    "zinc-50" => "#fafafa",
    "zinc-100" => "#f4f4f5",
    "zinc-200" => "#e4e4e7",
    "zinc-300" => "#d4d4d8",
    "zinc-400" => "#a1a1aa",
    "zinc-500" => "#71717a",
    "zinc-600" => "#52525b",
    "zinc-700" => "#3f3f46",
    "zinc-800" => "#27272a",
    "zinc-900" => "#18181b",
    "zinc-950" => "#09090b",

    // Red
    "red-50" => "#fef2f2",
    "red-100" => "#fee2e2",
    "red-200" => "#fecaca",
    "red-300" => "#fca5a5",
    "red-400" => "#f87171",
    "red-500" => "#ef4444",
    "red-600" => "#dc2626",
    "red-700" => "#b91c1c",
    "red-800" => "#991b1b",
    "red-900" => "#7f1d1d",
    "red-950" => "#450a0a",

    // Orange
    "orange-50" => "#fff7ed",
    "orange-100" => "#ffedd5",
    "orange-200" => "#fed7aa",
    "orange-300" => "#fdba74",
    "orange-400" => "#fb923c",
    "orange-500" => "#f97316",
    "orange-600" => "#ea580c",
    "orange-700" => "#c2410c",
    "orange-800" => "#9a3412",
    "orange-900" => "#7c2d12",
    "orange-950" => "#431407",

    // Yellow
    "yellow-50" => "#fefce8",
    "yellow-100" => "#fef9c3",
    "yellow-200" => "#fef08a",
    "yellow-300" => "#fde047",
    "yellow-400" => "#facc15",
    "yellow-500" => "#eab308",
    "yellow-600" => "#ca8a04",
    "yellow-700" => "#a16207",
    "yellow-800" => "#854d0e",
    "yellow-900" => "#713f12",
    "yellow-950" => "#422006",

    // Green
    "green-50" => "#f0fdf4",
    "green-100" => "#dcfce7",
    "green-200" => "#bbf7d0",
    "green-300" => "#86efac",
    "green-400" => "#4ade80",
    "green-500" => "#22c55e",
    "green-600" => "#16a34a",
    "green-700" => "#15803d",
    "green-800" => "#166534",
    "green-900" => "#14532d",
    "green-950" => "#052e16",

    // Blue
    "blue-50" => "#eff6ff",
    "blue-100" => "#dbeafe",
    "blue-200" => "#bfdbfe",
    "blue-300" => "#93c5fd",
    "blue-400" => "#60a5fa",
    "blue-500" => "#3b82f6",
    "blue-600" => "#2563eb",
    "blue-700" => "#1d4ed8",
    "blue-800" => "#1e40af",
    "blue-900" => "#1e3a8a",
    "blue-950" => "#172554",

    // Indigo
    "indigo-50" => "#eef2ff",
    "indigo-100" => "#e0e7ff",
    "indigo-200" => "#c7d2fe",
    "indigo-300" => "#a5b4fc",
    "indigo-400" => "#818cf8",
    "indigo-500" => "#6366f1",
    "indigo-600" => "#4f46e5",
    "indigo-700" => "#4338ca",
    "indigo-800" => "#3730a3",
    "indigo-900" => "#312e81",
    "indigo-950" => "#1e1b4b",

    // Purple
    "purple-50" => "#faf5ff",
    "purple-100" => "#f3e8ff",
    "purple-200" => "#e9d5ff",
    "purple-300" => "#d8b4fe",
    "purple-400" => "#c084fc",
    "purple-500" => "#a855f7",
    "purple-600" => "#9333ea",
    "purple-700" => "#7e22ce",
    "purple-800" => "#6b21a8",
    "purple-900" => "#581c87",
    "purple-950" => "#3b0764",

    // Pink
    "pink-50" => "#fdf2f8",
    "pink-100" => "#fce7f3",
    "pink-200" => "#fbcfe8",
    "pink-300" => "#f9a8d4",
    "pink-400" => "#f472b6",
    "pink-500" => "#ec4899",
    "pink-600" => "#db2777",
    "pink-700" => "#be185d",
    "pink-800" => "#9d174d",
    "pink-900" => "#831843",
    "pink-950" => "#500724",
};

/// `spacing`
pub static SPACING: ThemeMap = phf_ordered_map! {
    "0" => "0px",
    "px" => "1px",
    "0.5" => "0.125rem",
    "1" => "0.25rem",
    "1.5" => "0.375rem",
    "2" => "0.5rem",
    "2.5" => "0.625rem",
    "3" => "0.75rem",
    "3.5" => "0.875rem",
    "4" => "1rem",
    "5" => "1.25rem",
    "6" => "1.5rem",
    "7" => "1.75rem",
    "8" => "2rem",
    "9" => "2.25rem",
    "10" => "2.5rem",
    "11" => "2.75rem",
    "12" => "3rem",
    "14" => "3.5rem",
    "16" => "4rem",
    "20" => "5rem",
    "24" => "6rem",
    "28" => "7rem",
    "32" => "8rem",
    "36" => "9rem",
    "40" => "10rem",
    "44" => "11rem",
    "48" => "12rem",
    "52" => "13rem",
    "56" => "14rem",
    "60" => "15rem",
    "64" => "16rem",
    "72" => "18rem",
    "80" => "20rem",
    "96" => "24rem",
};

/// `screens`，声明顺序即断点顺序
pub static SCREENS: ThemeMap = phf_ordered_map! {
    "sm" => "640px",
    "md" => "768px",
    "lg" => "1024px",
    "xl" => "1280px",
    "2xl" => "1536px",
};

/// `width` 中 spacing 之外的值
pub static WIDTH: ThemeMap = phf_ordered_map! {
    "auto" => "auto",
    "1/2" => "50%",
    "1/3" => "33.333333%",
    "2/3" => "66.666667%",
    "1/4" => "25%",
    "3/4" => "75%",
    "full" => "100%",
    "screen" => "100vw",
    "min" => "min-content",
    "max" => "max-content",
    "fit" => "fit-content",
};

/// `height` 中 spacing 之外的值
pub static HEIGHT: ThemeMap = phf_ordered_map! {
    "auto" => "auto",
    "1/2" => "50%",
    "full" => "100%",
    "screen" => "100vh",
    "min" => "min-content",
    "max" => "max-content",
    "fit" => "fit-content",
};

pub static MAX_WIDTH: ThemeMap = phf_ordered_map! {
    "none" => "none",
    "0" => "0rem",
    "xs" => "20rem",
    "sm" => "24rem",
    "md" => "28rem",
    "lg" => "32rem",
    "xl" => "36rem",
    "2xl" => "42rem",
    "3xl" => "48rem",
    "4xl" => "56rem",
    "5xl" => "64rem",
    "6xl" => "72rem",
    "7xl" => "80rem",
    "full" => "100%",
    "min" => "min-content",
    "max" => "max-content",
    "fit" => "fit-content",
    "prose" => "65ch",
};

/// `margin` 中 spacing 之外的值
pub static MARGIN: ThemeMap = phf_ordered_map! {
    "auto" => "auto",
};

/// `inset` 中 spacing 之外的值
pub static INSET: ThemeMap = phf_ordered_map! {
    "auto" => "auto",
    "1/2" => "50%",
    "full" => "100%",
};

pub static FONT_FAMILY: ThemeMap = phf_ordered_map! {
    "sans" => "ui-sans-serif, system-ui, sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\"",
    "serif" => "ui-serif, Georgia, Cambria, \"Times New Roman\", Times, serif",
    "mono" => "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, \"Liberation Mono\", monospace",
};

/// `fontSize` 的字号部分
pub static FONT_SIZE: ThemeMap = phf_ordered_map! {
    "xs" => "0.75rem",
    "sm" => "0.875rem",
    "base" => "1rem",
    "lg" => "1.125rem",
    "xl" => "1.25rem",
    "2xl" => "1.5rem",
    "3xl" => "1.875rem",
    "4xl" => "2.25rem",
    "5xl" => "3rem",
    "6xl" => "3.75rem",
};

/// `fontSize` 的行高部分，与 `FONT_SIZE` 同键
pub static FONT_SIZE_LINE_HEIGHT: ThemeMap = phf_ordered_map! {
    "xs" => "1rem",
    "sm" => "1.25rem",
    "base" => "1.5rem",
    "lg" => "1.75rem",
    "xl" => "1.75rem",
    "2xl" => "2rem",
    "3xl" => "2.25rem",
    "4xl" => "2.5rem",
    "5xl" => "1",
    "6xl" => "1",
};

pub static FONT_WEIGHT: ThemeMap = phf_ordered_map! {
    "thin" => "100",
    "extralight" => "200",
    "light" => "300",
    "normal" => "400",
    "medium" => "500",
    "semibold" => "600",
    "bold" => "700",
    "extrabold" => "800",
    "black" => "900",
};

pub static LINE_HEIGHT: ThemeMap = phf_ordered_map! {
    "none" => "1",
    "tight" => "1.25",
    "snug" => "1.375",
    "normal" => "1.5",
    "relaxed" => "1.625",
    "loose" => "2",
    "3" => ".75rem",
    "4" => "1rem",
    "5" => "1.25rem",
    "6" => "1.5rem",
    "7" => "1.75rem",
    "8" => "2rem",
    "9" => "2.25rem",
    "10" => "2.5rem",
};

pub static LETTER_SPACING: ThemeMap = phf_ordered_map! {
    "tighter" => "-0.05em",
    "tight" => "-0.025em",
    "normal" => "0em",
    "wide" => "0.025em",
    "wider" => "0.05em",
    "widest" => "0.1em",
};

pub static BORDER_RADIUS: ThemeMap = phf_ordered_map! {
    "none" => "0px",
    "sm" => "0.125rem",
    "DEFAULT" => "0.25rem",
    "md" => "0.375rem",
    "lg" => "0.5rem",
    "xl" => "0.75rem",
    "2xl" => "1rem",
    "3xl" => "1.5rem",
    "full" => "9999px",
};

pub static BORDER_WIDTH: ThemeMap = phf_ordered_map! {
    "DEFAULT" => "1px",
    "0" => "0px",
    "2" => "2px",
    "4" => "4px",
    "8" => "8px",
};

pub static OPACITY: ThemeMap = phf_ordered_map! {
    "0" => "0",
    "5" => "0.05",
    "10" => "0.1",
    "20" => "0.2",
    "25" => "0.25",
    "30" => "0.3",
    "40" => "0.4",
    "50" => "0.5",
    "60" => "0.6",
    "70" => "0.7",
    "75" => "0.75",
    "80" => "0.8",
    "90" => "0.9",
    "95" => "0.95",
    "100" => "1",
};

pub static Z_INDEX: ThemeMap = phf_ordered_map! {
    "auto" => "auto",
    "0" => "0",
    "10" => "10",
    "20" => "20",
    "30" => "30",
    "40" => "40",
    "50" => "50",
};

/// 分类名 → 默认表，决定默认主题中分类的顺序
///
/// `fontSize` 不在此列，由 `ThemeTable::defaults()` 组合两张表生成。
pub static CATEGORIES: &[(&str, &ThemeMap)] = &[
    ("colors", &COLORS),
    ("spacing", &SPACING),
    ("screens", &SCREENS),
    ("width", &WIDTH),
    ("height", &HEIGHT),
    ("maxWidth", &MAX_WIDTH),
    ("margin", &MARGIN),
    ("inset", &INSET),
    ("fontFamily", &FONT_FAMILY),
    ("fontWeight", &FONT_WEIGHT),
    ("lineHeight", &LINE_HEIGHT),
    ("letterSpacing", &LETTER_SPACING),
    ("borderRadius", &BORDER_RADIUS),
    ("borderWidth", &BORDER_WIDTH),
    ("opacity", &OPACITY),
    ("zIndex", &Z_INDEX),
];
