//! HTML elements.
//!
//! Organized in the same order as <https://developer.mozilla.org/en-US/docs/Web/HTML/Element>.
//! Obsolete and deprecated elements are left out; [`ztml_core::Element`] covers anything
//! not listed here.

elements! {
    traits: [];

    // Main root

    /// Build a
    /// [`<html>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/html)
    /// element
    html(HtmlHtml) "html" {
        xmlns: String,
    };

    // Document metadata

    /// Build a
    /// [`<base>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/base)
    /// element
    base(HtmlBase) "base" [self_closing] {
        href: String,
        target: Target,
    };

    /// Build a
    /// [`<head>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/head)
    /// element
    head(HtmlHead) "head" {};

    /// Build a
    /// [`<link>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/link)
    /// element
    link(HtmlLink) "link" [self_closing] {
        r#as("as"): String,
        crossorigin: CrossOrigin,
        fetchpriority: FetchPriority,
        href: String,
        hreflang: String,
        imagesizes: String,
        imagesrcset: CommaList,
        integrity: String,
        media: String,
        referrerpolicy: ReferrerPolicy,
        rel: SpacedList,
        sizes: SpacedList,
        r#type("type"): String,
    };

    /// Build a
    /// [`<meta>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/meta)
    /// element
    meta(HtmlMeta) "meta" [self_closing] {
        charset: String,
        content: String,
        http_equiv("http-equiv"): HttpEquiv,
        media: String,
        name: String,
    };

    /// Build a
    /// [`<style>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/style)
    /// element
    style(HtmlStyle) "style" {
        media: String,
    };

    /// Build a
    /// [`<title>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/title)
    /// element
    title(HtmlTitle) "title" {};

    // Sectioning root

    /// Build a
    /// [`<body>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/body)
    /// element
    body(HtmlBody) "body" {};

    // Content sectioning

    /// Build a
    /// [`<address>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/address)
    /// element
    address(HtmlAddress) "address" {};

    /// Build a
    /// [`<article>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/article)
    /// element
    article(HtmlArticle) "article" {};

    /// Build a
    /// [`<aside>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/aside)
    /// element
    aside(HtmlAside) "aside" {};

    /// Build a
    /// [`<footer>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/footer)
    /// element
    footer(HtmlFooter) "footer" {};

    /// Build a
    /// [`<header>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/header)
    /// element
    header(HtmlHeader) "header" {};

    /// Build a
    /// [`<h1>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/h1)
    /// element
    h1(HtmlH1) "h1" {};

    /// Build a
    /// [`<h2>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/h2)
    /// element
    h2(HtmlH2) "h2" {};

    /// Build a
    /// [`<h3>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/h3)
    /// element
    h3(HtmlH3) "h3" {};

    /// Build a
    /// [`<h4>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/h4)
    /// element
    h4(HtmlH4) "h4" {};

    /// Build a
    /// [`<h5>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/h5)
    /// element
    h5(HtmlH5) "h5" {};

    /// Build a
    /// [`<h6>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/h6)
    /// element
    h6(HtmlH6) "h6" {};

    /// Build a
    /// [`<hgroup>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/hgroup)
    /// element
    hgroup(HtmlHgroup) "hgroup" {};

    /// Build a
    /// [`<main>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/main)
    /// element
    main(HtmlMain) "main" {};

    /// Build a
    /// [`<nav>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/nav)
    /// element
    nav(HtmlNav) "nav" {};

    /// Build a
    /// [`<search>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/search)
    /// element
    search(HtmlSearch) "search" {};

    /// Build a
    /// [`<section>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/section)
    /// element
    section(HtmlSection) "section" {};

    // Text content

    /// Build a
    /// [`<blockquote>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/blockquote)
    /// element
    blockquote(HtmlBlockquote) "blockquote" {
        cite: String,
    };

    /// Build a
    /// [`<dd>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/dd)
    /// element
    dd(HtmlDd) "dd" {};

    /// Build a
    /// [`<div>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/div)
    /// element
    div(HtmlDiv) "div" {};

    /// Build a
    /// [`<dl>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/dl)
    /// element
    dl(HtmlDl) "dl" {};

    /// Build a
    /// [`<dt>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/dt)
    /// element
    dt(HtmlDt) "dt" {};

    /// Build a
    /// [`<figcaption>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/figcaption)
    /// element
    figcaption(HtmlFigcaption) "figcaption" {};

    /// Build a
    /// [`<figure>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/figure)
    /// element
    figure(HtmlFigure) "figure" {};

    /// Build a
    /// [`<hr>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/hr)
    /// element
    hr(HtmlHr) "hr" [self_closing] {};

    /// Build a
    /// [`<li>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/li)
    /// element
    li(HtmlLi) "li" {
        value: i64,
    };

    /// Build a
    /// [`<menu>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/menu)
    /// element
    menu(HtmlMenu) "menu" {};

    /// Build a
    /// [`<ol>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/ol)
    /// element
    ol(HtmlOl) "ol" {
        reversed: bool,
        start: i64,
        r#type("type"): OrderedListType,
    };

    /// Build a
    /// [`<p>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/p)
    /// element
    p(HtmlP) "p" {};

    /// Build a
    /// [`<pre>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/pre)
    /// element
    pre(HtmlPre) "pre" {};

    /// Build a
    /// [`<ul>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/ul)
    /// element
    ul(HtmlUl) "ul" {};

    // Inline text semantics

    /// Build a
    /// [`<a>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/a)
    /// element
    a(HtmlA) "a" {
        download: String,
        href: String,
        hreflang: String,
        ping: SpacedList,
        referrerpolicy: ReferrerPolicy,
        rel: SpacedList,
        target: Target,
        r#type("type"): String,
    };

    /// Build a
    /// [`<abbr>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/abbr)
    /// element
    abbr(HtmlAbbr) "abbr" {};

    /// Build a
    /// [`<b>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/b)
    /// element
    b(HtmlB) "b" {};

    /// Build a
    /// [`<bdi>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/bdi)
    /// element
    bdi(HtmlBdi) "bdi" {};

    /// Build a
    /// [`<bdo>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/bdo)
    /// element
    bdo(HtmlBdo) "bdo" {};

    /// Build a
    /// [`<br>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/br)
    /// element
    br(HtmlBr) "br" [self_closing] {};

    /// Build a
    /// [`<cite>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/cite)
    /// element
    cite(HtmlCite) "cite" {};

    /// Build a
    /// [`<code>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/code)
    /// element
    code(HtmlCode) "code" {};

    /// Build a
    /// [`<data>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/data)
    /// element
    data(HtmlData) "data" {
        value: String,
    };

    /// Build a
    /// [`<dfn>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/dfn)
    /// element
    dfn(HtmlDfn) "dfn" {};

    /// Build a
    /// [`<em>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/em)
    /// element
    em(HtmlEm) "em" {};

    /// Build a
    /// [`<i>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/i)
    /// element
    i(HtmlI) "i" {};

    /// Build a
    /// [`<kbd>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/kbd)
    /// element
    kbd(HtmlKbd) "kbd" {};

    /// Build a
    /// [`<mark>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/mark)
    /// element
    mark(HtmlMark) "mark" {};

    /// Build a
    /// [`<q>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/q)
    /// element
    q(HtmlQ) "q" {
        cite: String,
    };

    /// Build a
    /// [`<rp>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/rp)
    /// element
    rp(HtmlRp) "rp" {};

    /// Build a
    /// [`<rt>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/rt)
    /// element
    rt(HtmlRt) "rt" {};

    /// Build a
    /// [`<ruby>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/ruby)
    /// element
    ruby(HtmlRuby) "ruby" {};

    /// Build a
    /// [`<s>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/s)
    /// element
    s(HtmlS) "s" {};

    /// Build a
    /// [`<samp>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/samp)
    /// element
    samp(HtmlSamp) "samp" {};

    /// Build a
    /// [`<small>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/small)
    /// element
    small(HtmlSmall) "small" {};

    /// Build a
    /// [`<span>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/span)
    /// element
    span(HtmlSpan) "span" {};

    /// Build a
    /// [`<strong>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/strong)
    /// element
    strong(HtmlStrong) "strong" {};

    /// Build a
    /// [`<sub>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/sub)
    /// element
    sub(HtmlSub) "sub" {};

    /// Build a
    /// [`<sup>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/sup)
    /// element
    sup(HtmlSup) "sup" {};

    /// Build a
    /// [`<time>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/time)
    /// element
    time(HtmlTime) "time" {
        datetime: String,
    };

    /// Build a
    /// [`<u>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/u)
    /// element
    u(HtmlU) "u" {};

    /// Build a
    /// [`<var>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/var)
    /// element
    var(HtmlVar) "var" {};

    /// Build a
    /// [`<wbr>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/wbr)
    /// element
    wbr(HtmlWbr) "wbr" [self_closing] {};

    // Image and multimedia

    /// Build a
    /// [`<area>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/area)
    /// element
    area(HtmlArea) "area" [self_closing] {
        alt: String,
        coords: CommaList,
        download: String,
        href: String,
        ping: SpacedList,
        referrerpolicy: ReferrerPolicy,
        rel: SpacedList,
        shape: AreaShape,
        target: Target,
    };

    /// Build a
    /// [`<audio>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/audio)
    /// element
    audio(HtmlAudio) "audio" {
        autoplay: bool,
        controls: bool,
        crossorigin: CrossOrigin,
        r#loop("loop"): bool,
        muted: bool,
        preload: Preload,
        src: String,
    };

    /// Build a
    /// [`<img>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/img)
    /// element
    img(HtmlImg) "img" [self_closing] {
        alt: String,
        crossorigin: CrossOrigin,
        decoding: Decoding,
        fetchpriority: FetchPriority,
        height: i64,
        ismap: bool,
        loading: Loading,
        referrerpolicy: ReferrerPolicy,
        sizes: CommaList,
        src: String,
        srcset: CommaList,
        usemap: String,
        width: i64,
    };

    /// Build a
    /// [`<map>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/map)
    /// element
    map(HtmlMap) "map" {
        name: String,
    };

    /// Build a
    /// [`<track>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/track)
    /// element
    track(HtmlTrack) "track" [self_closing] {
        is_default("default"): bool,
        kind: TrackKind,
        label: String,
        src: String,
        srclang: String,
    };

    /// Build a
    /// [`<video>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/video)
    /// element
    video(HtmlVideo) "video" {
        autoplay: bool,
        controls: bool,
        crossorigin: CrossOrigin,
        height: i64,
        r#loop("loop"): bool,
        muted: bool,
        playsinline: bool,
        poster: String,
        preload: Preload,
        src: String,
        width: i64,
    };

    // Embedded content

    /// Build a
    /// [`<embed>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/embed)
    /// element
    embed(HtmlEmbed) "embed" [self_closing] {
        height: i64,
        src: String,
        r#type("type"): String,
        width: i64,
    };

    /// Build a
    /// [`<iframe>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/iframe)
    /// element
    iframe(HtmlIframe) "iframe" {
        allow: String,
        allowfullscreen: bool,
        height: i64,
        loading: Loading,
        name: String,
        referrerpolicy: ReferrerPolicy,
        sandbox: SpacedList,
        src: String,
        srcdoc: String,
        width: i64,
    };

    /// Build a
    /// [`<object>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/object)
    /// element
    object(HtmlObject) "object" {
        data: String,
        form: String,
        height: i64,
        name: String,
        r#type("type"): String,
        width: i64,
    };

    /// Build a
    /// [`<picture>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/picture)
    /// element
    picture(HtmlPicture) "picture" {};

    /// Build a
    /// [`<source>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/source)
    /// element
    source(HtmlSource) "source" [self_closing] {
        height: i64,
        media: String,
        sizes: CommaList,
        src: String,
        srcset: CommaList,
        r#type("type"): String,
        width: i64,
    };

    // Scripting

    /// Build a
    /// [`<canvas>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/canvas)
    /// element
    canvas(HtmlCanvas) "canvas" {
        height: i64,
        width: i64,
    };

    /// Build a
    /// [`<noscript>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/noscript)
    /// element
    noscript(HtmlNoscript) "noscript" {};

    /// Build a
    /// [`<script>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/script)
    /// element
    script(HtmlScript) "script" {
        r#async("async"): bool,
        crossorigin: CrossOrigin,
        defer: bool,
        fetchpriority: FetchPriority,
        integrity: String,
        nomodule: bool,
        referrerpolicy: ReferrerPolicy,
        src: String,
        r#type("type"): String,
    };

    // Demarcating edits

    /// Build a
    /// [`<del>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/del)
    /// element
    del(HtmlDel) "del" {
        cite: String,
        datetime: String,
    };

    /// Build a
    /// [`<ins>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/ins)
    /// element
    ins(HtmlIns) "ins" {
        cite: String,
        datetime: String,
    };

    // Table content

    /// Build a
    /// [`<caption>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/caption)
    /// element
    caption(HtmlCaption) "caption" {};

    /// Build a
    /// [`<col>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/col)
    /// element
    col(HtmlCol) "col" [self_closing] {
        span: i64,
    };

    /// Build a
    /// [`<colgroup>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/colgroup)
    /// element
    colgroup(HtmlColgroup) "colgroup" {
        span: i64,
    };

    /// Build a
    /// [`<table>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/table)
    /// element
    table(HtmlTable) "table" {};

    /// Build a
    /// [`<tbody>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/tbody)
    /// element
    tbody(HtmlTbody) "tbody" {};

    /// Build a
    /// [`<td>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/td)
    /// element
    td(HtmlTd) "td" {
        colspan: i64,
        headers: SpacedList,
        rowspan: i64,
    };

    /// Build a
    /// [`<tfoot>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/tfoot)
    /// element
    tfoot(HtmlTfoot) "tfoot" {};

    /// Build a
    /// [`<th>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/th)
    /// element
    th(HtmlTh) "th" {
        abbr: String,
        colspan: i64,
        headers: SpacedList,
        rowspan: i64,
        scope: TableScope,
    };

    /// Build a
    /// [`<thead>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/thead)
    /// element
    thead(HtmlThead) "thead" {};

    /// Build a
    /// [`<tr>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/tr)
    /// element
    tr(HtmlTr) "tr" {};

    // Forms

    /// Build a
    /// [`<button>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/button)
    /// element
    button(HtmlButton) "button" {
        disabled: bool,
        form: String,
        formaction: String,
        formenctype: FormEnctype,
        formmethod: FormMethod,
        formnovalidate: bool,
        formtarget: Target,
        name: String,
        popovertarget: String,
        popovertargetaction: String,
        r#type("type"): ButtonType,
        value: String,
    };

    /// Build a
    /// [`<datalist>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/datalist)
    /// element
    datalist(HtmlDatalist) "datalist" {};

    /// Build a
    /// [`<fieldset>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/fieldset)
    /// element
    fieldset(HtmlFieldset) "fieldset" {
        disabled: bool,
        form: String,
        name: String,
    };

    /// Build a
    /// [`<form>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/form)
    /// element
    form(HtmlForm) "form" {
        accept_charset("accept-charset"): SpacedList,
        action: String,
        autocomplete: OnOff,
        enctype: FormEnctype,
        method: FormMethod,
        name: String,
        novalidate: bool,
        rel: SpacedList,
        target: Target,
    };

    /// Build a
    /// [`<input>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/input)
    /// element
    input(HtmlInput) "input" [self_closing] {
        accept: CommaList,
        alt: String,
        autocomplete: String,
        checked: bool,
        dirname: String,
        disabled: bool,
        form: String,
        formaction: String,
        formenctype: FormEnctype,
        formmethod: FormMethod,
        formnovalidate: bool,
        formtarget: Target,
        height: i64,
        list: String,
        max: String,
        maxlength: i64,
        min: String,
        minlength: i64,
        multiple: bool,
        name: String,
        pattern: String,
        placeholder: String,
        readonly: bool,
        required: bool,
        size: i64,
        src: String,
        step: String,
        r#type("type"): InputType,
        value: String,
        width: i64,
    };

    /// Build a
    /// [`<label>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/label)
    /// element
    label(HtmlLabel) "label" {
        r#for("for"): String,
    };

    /// Build a
    /// [`<legend>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/legend)
    /// element
    legend(HtmlLegend) "legend" {};

    /// Build a
    /// [`<meter>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/meter)
    /// element
    meter(HtmlMeter) "meter" {
        high: f64,
        low: f64,
        max: f64,
        min: f64,
        optimum: f64,
        value: f64,
    };

    /// Build a
    /// [`<optgroup>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/optgroup)
    /// element
    optgroup(HtmlOptgroup) "optgroup" {
        disabled: bool,
        label: String,
    };

    /// Build a
    /// [`<option>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/option)
    /// element
    option(HtmlOption) "option" {
        disabled: bool,
        label: String,
        selected: bool,
        value: String,
    };

    /// Build a
    /// [`<output>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/output)
    /// element
    output(HtmlOutput) "output" {
        r#for("for"): SpacedList,
        form: String,
        name: String,
    };

    /// Build a
    /// [`<progress>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/progress)
    /// element
    progress(HtmlProgress) "progress" {
        max: f64,
        value: f64,
    };

    /// Build a
    /// [`<select>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/select)
    /// element
    select(HtmlSelect) "select" {
        autocomplete: String,
        disabled: bool,
        form: String,
        multiple: bool,
        name: String,
        required: bool,
        size: i64,
    };

    /// Build a
    /// [`<textarea>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/textarea)
    /// element
    textarea(HtmlTextarea) "textarea" {
        autocomplete: String,
        cols: i64,
        dirname: String,
        disabled: bool,
        form: String,
        maxlength: i64,
        minlength: i64,
        name: String,
        placeholder: String,
        readonly: bool,
        required: bool,
        rows: i64,
        wrap: TextWrap,
    };

    // Interactive elements

    /// Build a
    /// [`<details>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/details)
    /// element
    details(HtmlDetails) "details" {
        name: String,
        open: bool,
    };

    /// Build a
    /// [`<dialog>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/dialog)
    /// element
    dialog(HtmlDialog) "dialog" {
        open: bool,
    };

    /// Build a
    /// [`<summary>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/summary)
    /// element
    summary(HtmlSummary) "summary" {};

    // Web components

    /// Build a
    /// [`<slot>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/slot)
    /// element
    slot(HtmlSlot) "slot" {
        name: String,
    };

    /// Build a
    /// [`<template>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/template)
    /// element
    template(HtmlTemplate) "template" {};
}
