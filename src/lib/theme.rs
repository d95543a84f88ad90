//! Shared UI themes and Tailwind class constants to ensure visual consistency
//! across the application.

pub struct Theme;

impl Theme {
    /// Standard text input.
    pub const INPUT: &'static str = "w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200";

    /// Input label.
    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-slate-700";

    /// Inline validation message rendered under an invalid field.
    pub const FIELD_ERROR: &'static str = "mt-1 text-sm text-red-600";

    /// Card container used by the login form and the reset dialog.
    pub const CARD: &'static str = "w-full max-w-md rounded-2xl border border-slate-200 bg-white/90 p-6 shadow-[0_20px_60px_-40px_rgba(15,23,42,0.35)] backdrop-blur sm:p-8";

    /// Primary action button.
    pub const BUTTON_PRIMARY: &'static str = "w-full sm:w-auto px-5 py-2.5 text-sm font-medium text-white bg-rose-600 rounded-lg hover:bg-rose-700 focus:ring-4 focus:outline-none focus:ring-rose-300 text-center transition-all";

    /// Secondary button (guest entry, dialog cancel).
    pub const BUTTON_SECONDARY: &'static str = "w-full sm:w-auto px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 hover:text-blue-700 focus:ring-4 focus:ring-gray-100 text-center transition-all";
}
