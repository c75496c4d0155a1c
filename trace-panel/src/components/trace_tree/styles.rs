pub const TRACE_TREE_STYLES: &str = r#"
.trace-tree-panel {
    display: flex;
    flex-direction: column;
    height: 100%;
    min-height: 0;
    background: var(--bg-primary, #0f172a);
    color: var(--text-primary, #f8fafc);
    font-size: 0.8rem;
    outline: none;
}

.trace-tree-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 0.6rem;
    padding: 0.4rem 0.6rem;
    border-bottom: 1px solid var(--border-color, #334155);
    flex-shrink: 0;
}

.trace-tree-title {
    font-weight: 600;
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
}

.trace-tree-metrics {
    display: flex;
    gap: 0.35rem;
    align-items: center;
}

.trace-pill {
    border: 1px solid var(--border-color, #334155);
    background: var(--bg-secondary, #111827);
    color: var(--text-secondary, #cbd5e1);
    border-radius: 999px;
    font-size: 0.68rem;
    padding: 0.2rem 0.45rem;
    white-space: nowrap;
}

.trace-pill--error {
    border-color: #ef4444;
    color: #fca5a5;
}

.trace-zoom-controls {
    display: flex;
    align-items: center;
    gap: 0.25rem;
}

.trace-zoom-btn {
    background: color-mix(in srgb, var(--bg-primary, #0f172a) 75%, var(--accent-bg, #3b82f6) 25%);
    border: 1px solid var(--border-color, #334155);
    color: var(--text-primary, #f8fafc);
    border-radius: 0.35rem;
    padding: 0.15rem 0.5rem;
    font-size: 0.72rem;
    cursor: pointer;
}

.trace-zoom-btn:disabled {
    opacity: 0.4;
    cursor: default;
}

.trace-zoom-label {
    min-width: 3.2rem;
    text-align: center;
    font-variant-numeric: tabular-nums;
    color: var(--text-secondary, #94a3b8);
}

.trace-tree-body {
    display: flex;
    flex: 1;
    min-height: 0;
}

.trace-tree-left {
    display: flex;
    flex-direction: column;
    flex: 3;
    min-width: 0;
    border-right: 1px solid var(--border-color, #334155);
}

.trace-timeline-scroll {
    flex: 1;
    overflow: auto;
    padding: 0.5rem;
}

.trace-timeline-canvas {
    min-width: 100%;
}

.trace-span-node {
    box-sizing: border-box;
    min-width: 2px;
}

.trace-span-bar {
    height: 1.35rem;
    margin-bottom: 2px;
    border-radius: 3px;
    padding: 0 0.35rem;
    display: flex;
    align-items: center;
    gap: 0.3rem;
    overflow: hidden;
    white-space: nowrap;
    cursor: pointer;
    color: #0b1222;
    font-size: 0.7rem;
    background: #94a3b8;
}

.trace-span-bar:hover {
    filter: brightness(1.15);
}

.trace-span-bar--selected {
    outline: 2px solid var(--text-primary, #f8fafc);
    outline-offset: -2px;
}

.trace-span-bar--error {
    box-shadow: inset 3px 0 0 #ef4444;
}

.trace-span--chain { background: #4ade80; }
.trace-span--agent { background: #60a5fa; }
.trace-span--tool { background: #fbbf24; }
.trace-span--llm { background: #c084fc; }
.trace-span--unspecified { background: #94a3b8; }

.trace-span-name {
    overflow: hidden;
    text-overflow: ellipsis;
}

.trace-span-duration {
    opacity: 0.75;
    font-variant-numeric: tabular-nums;
}

.trace-outline {
    max-height: 35%;
    overflow: auto;
    border-top: 1px solid var(--border-color, #334155);
    padding: 0.3rem 0;
}

.trace-outline-row {
    display: flex;
    align-items: center;
    gap: 0.4rem;
    padding: 0.15rem 0.6rem;
    cursor: pointer;
    white-space: nowrap;
}

.trace-outline-row:hover {
    background: color-mix(in srgb, var(--bg-primary, #0f172a) 80%, var(--accent-bg, #3b82f6) 20%);
}

.trace-outline-row--selected {
    background: color-mix(in srgb, var(--bg-primary, #0f172a) 65%, var(--accent-bg, #3b82f6) 35%);
}

.trace-outline-row--error {
    color: #fca5a5;
}

.trace-kind-dot {
    width: 0.55rem;
    height: 0.55rem;
    border-radius: 50%;
    flex-shrink: 0;
}

.trace-outline-name {
    overflow: hidden;
    text-overflow: ellipsis;
}

.trace-outline-duration {
    margin-left: auto;
    color: var(--text-secondary, #94a3b8);
    font-variant-numeric: tabular-nums;
}

.trace-tree-right {
    flex: 2;
    min-width: 0;
    overflow: auto;
    padding: 0.6rem;
}

.trace-detail-title {
    display: flex;
    align-items: center;
    gap: 0.4rem;
    margin: 0 0 0.5rem 0;
    font-size: 0.95rem;
}

.trace-detail-section {
    margin: 0.8rem 0 0.3rem 0;
    font-size: 0.72rem;
    text-transform: uppercase;
    letter-spacing: 0.04em;
    color: var(--text-secondary, #94a3b8);
}

.trace-detail-table {
    width: 100%;
    border-collapse: collapse;
    table-layout: fixed;
}

.trace-detail-table td {
    border-bottom: 1px solid var(--border-color, #1f2a44);
    padding: 0.25rem 0.35rem;
    vertical-align: top;
    overflow-wrap: anywhere;
}

.trace-detail-key {
    width: 32%;
    color: var(--text-secondary, #94a3b8);
}

.trace-detail-pre {
    margin: 0;
    white-space: pre-wrap;
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    font-size: 0.7rem;
}

.trace-detail-empty {
    color: var(--text-secondary, #94a3b8);
    font-style: italic;
}

.trace-tooltip {
    position: fixed;
    z-index: 1000;
    pointer-events: none;
    max-width: 320px;
    background: var(--bg-secondary, #111827);
    border: 1px solid var(--border-color, #334155);
    border-radius: 6px;
    padding: 0.4rem 0.55rem;
    box-shadow: 0 6px 18px rgba(0, 0, 0, 0.35);
    font-size: 0.72rem;
}

.trace-tooltip-title {
    font-weight: 600;
    margin-bottom: 0.2rem;
}

.trace-tooltip-row {
    color: var(--text-secondary, #cbd5e1);
}

.trace-tooltip-error {
    color: #fca5a5;
}

.trace-model-node {
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    font-size: 0.7rem;
}

.trace-model-toggle {
    cursor: pointer;
    user-select: none;
}

.trace-model-key {
    color: #93c5fd;
}

.trace-model-value {
    color: var(--text-secondary, #cbd5e1);
}
"#;
