// light values live on :root and the dark marker on <html> overrides them
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #2563EB;          /* Brand blue */
  --primary-light: #60A5FA;
  --primary-dark: #1D4ED8;
  --accent: #06B6D4;           /* Cyan used for the second half of gradients */
  --accent-light: #67E8F9;

  /* Neutrals */
  --neutral-50: #F8FAFC;
  --neutral-100: #F1F5F9;
  --neutral-200: #E2E8F0;
  --neutral-300: #CBD5E1;
  --neutral-400: #94A3B8;
  --neutral-500: #64748B;
  --neutral-600: #475569;
  --neutral-700: #334155;
  --neutral-800: #1E293B;
  --neutral-900: #0F172A;
  --neutral-950: #020617;

  /* Background and Surface Colors */
  --background: #FFFFFF;
  --surface: #FFFFFF;
  --surface-muted: var(--neutral-50);
  --surface-glass: rgba(255, 255, 255, 0.8);
  --overlay: rgba(15, 23, 42, 0.5);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--neutral-200);
  --border-strong: var(--neutral-300);

  /* Gradients */
  --gradient-brand: linear-gradient(90deg, var(--primary), var(--accent));
  --gradient-title: linear-gradient(90deg, #3B82F6, #06B6D4, #3B82F6);

  /* Layout */
  --header-height: 80px;
  --sidebar-width: 288px;
  --container-width: 1152px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;
  --space-24: 96px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 8px;
  --radius-lg: 12px;
  --radius-xl: 16px;
  --radius-2xl: 24px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
  --shadow-glow: 0 10px 25px -5px rgba(37, 99, 235, 0.35);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --transition-slow: 500ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
  --easing-launch: cubic-bezier(0.55, 0.0, 1, 0.45);
}

:root.dark {
  --primary: #3B82F6;
  --primary-light: #93C5FD;
  --primary-dark: #2563EB;
  --accent: #22D3EE;

  --background: var(--neutral-950);
  --surface: var(--neutral-900);
  --surface-muted: rgba(15, 23, 42, 0.6);
  --surface-glass: rgba(2, 6, 23, 0.8);
  --overlay: rgba(0, 0, 0, 0.6);

  --text-primary: #FFFFFF;
  --text-secondary: var(--neutral-400);
  --text-tertiary: var(--neutral-500);

  --border: var(--neutral-800);
  --border-strong: var(--neutral-700);

  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.4);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.5);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.6);
}
"#;
