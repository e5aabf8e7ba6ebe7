//! Closed value sets for attributes that only accept a fixed list of strings.

choices! {
    /// Request method used by the `z-req-method` attribute. The empty value leaves the
    /// choice to the client runtime.
    ZReqMethod {
        Empty = "",
        Get = "get",
        Post = "post",
    }

    Dir {
        Ltr = "ltr",
        Rtl = "rtl",
        Auto = "auto",
    }

    ContentEditable {
        True = "true",
        False = "false",
        PlaintextOnly = "plaintext-only",
    }

    EnterKeyHint {
        Enter = "enter",
        Done = "done",
        Go = "go",
        Next = "next",
        Previous = "previous",
        Search = "search",
        Send = "send",
    }

    InputMode {
        None = "none",
        Text = "text",
        Decimal = "decimal",
        Numeric = "numeric",
        Tel = "tel",
        Search = "search",
        Email = "email",
        Url = "url",
    }

    YesNo {
        Yes = "yes",
        No = "no",
    }

    OnOff {
        On = "on",
        Off = "off",
    }

    /// Browsing context for links and form submissions.
    Target {
        SelfFrame = "_self",
        Blank = "_blank",
        Parent = "_parent",
        Top = "_top",
    }

    ReferrerPolicy {
        NoReferrer = "no-referrer",
        NoReferrerWhenDowngrade = "no-referrer-when-downgrade",
        Origin = "origin",
        OriginWhenCrossOrigin = "origin-when-cross-origin",
        SameOrigin = "same-origin",
        StrictOrigin = "strict-origin",
        StrictOriginWhenCrossOrigin = "strict-origin-when-cross-origin",
        UnsafeUrl = "unsafe-url",
    }

    CrossOrigin {
        Anonymous = "anonymous",
        UseCredentials = "use-credentials",
    }

    FetchPriority {
        High = "high",
        Low = "low",
        Auto = "auto",
    }

    Loading {
        Eager = "eager",
        Lazy = "lazy",
    }

    Decoding {
        Sync = "sync",
        Async = "async",
        Auto = "auto",
    }

    Preload {
        None = "none",
        Metadata = "metadata",
        Auto = "auto",
    }

    InputType {
        Button = "button",
        Checkbox = "checkbox",
        Color = "color",
        Date = "date",
        DatetimeLocal = "datetime-local",
        Email = "email",
        File = "file",
        Hidden = "hidden",
        Image = "image",
        Month = "month",
        Number = "number",
        Password = "password",
        Radio = "radio",
        Range = "range",
        Reset = "reset",
        Search = "search",
        Submit = "submit",
        Tel = "tel",
        Text = "text",
        Time = "time",
        Url = "url",
        Week = "week",
    }

    ButtonType {
        Button = "button",
        Submit = "submit",
        Reset = "reset",
    }

    FormMethod {
        Get = "get",
        Post = "post",
        Dialog = "dialog",
    }

    FormEnctype {
        UrlEncoded = "application/x-www-form-urlencoded",
        Multipart = "multipart/form-data",
        TextPlain = "text/plain",
    }

    OrderedListType {
        Decimal = "1",
        LowerAlpha = "a",
        UpperAlpha = "A",
        LowerRoman = "i",
        UpperRoman = "I",
    }

    TableScope {
        Row = "row",
        Col = "col",
        Rowgroup = "rowgroup",
        Colgroup = "colgroup",
    }

    TextWrap {
        Hard = "hard",
        Soft = "soft",
        Off = "off",
    }

    TrackKind {
        Subtitles = "subtitles",
        Captions = "captions",
        Descriptions = "descriptions",
        Chapters = "chapters",
        Metadata = "metadata",
    }

    HttpEquiv {
        ContentSecurityPolicy = "content-security-policy",
        ContentType = "content-type",
        DefaultStyle = "default-style",
        Refresh = "refresh",
        XUaCompatible = "x-ua-compatible",
    }

    AreaShape {
        Default = "default",
        Rect = "rect",
        Circle = "circle",
        Poly = "poly",
    }

    FillRule {
        Nonzero = "nonzero",
        Evenodd = "evenodd",
    }

    StrokeLinecap {
        Butt = "butt",
        Round = "round",
        Square = "square",
    }

    StrokeLinejoin {
        Arcs = "arcs",
        Bevel = "bevel",
        Miter = "miter",
        MiterClip = "miter-clip",
        Round = "round",
    }

    TextAnchor {
        Start = "start",
        Middle = "middle",
        End = "end",
    }

    Visibility {
        Visible = "visible",
        Hidden = "hidden",
        Collapse = "collapse",
    }

    /// Coordinate system for gradients, patterns, clip paths, masks and filters.
    Units {
        UserSpaceOnUse = "userSpaceOnUse",
        ObjectBoundingBox = "objectBoundingBox",
    }

    SpreadMethod {
        Pad = "pad",
        Reflect = "reflect",
        Repeat = "repeat",
    }

    LengthAdjust {
        Spacing = "spacing",
        SpacingAndGlyphs = "spacingAndGlyphs",
    }

    MarkerUnits {
        StrokeWidth = "strokeWidth",
        UserSpaceOnUse = "userSpaceOnUse",
    }

    BlendMode {
        Normal = "normal",
        Multiply = "multiply",
        Screen = "screen",
        Overlay = "overlay",
        Darken = "darken",
        Lighten = "lighten",
        ColorDodge = "color-dodge",
        ColorBurn = "color-burn",
        HardLight = "hard-light",
        SoftLight = "soft-light",
        Difference = "difference",
        Exclusion = "exclusion",
        Hue = "hue",
        Saturation = "saturation",
        Color = "color",
        Luminosity = "luminosity",
    }

    CompositeOperator {
        Over = "over",
        In = "in",
        Out = "out",
        Atop = "atop",
        Xor = "xor",
        Lighter = "lighter",
        Arithmetic = "arithmetic",
    }

    ColorMatrixType {
        Matrix = "matrix",
        Saturate = "saturate",
        HueRotate = "hueRotate",
        LuminanceToAlpha = "luminanceToAlpha",
    }

    TurbulenceType {
        FractalNoise = "fractalNoise",
        Turbulence = "turbulence",
    }

    StitchTiles {
        Stitch = "stitch",
        NoStitch = "noStitch",
    }

    EdgeMode {
        Duplicate = "duplicate",
        Wrap = "wrap",
        None = "none",
    }

    MorphologyOperator {
        Erode = "erode",
        Dilate = "dilate",
    }

    ChannelSelector {
        R = "R",
        G = "G",
        B = "B",
        A = "A",
    }

    TransferFunctionType {
        Identity = "identity",
        Table = "table",
        Discrete = "discrete",
        Linear = "linear",
        Gamma = "gamma",
    }

    AnimationFill {
        Freeze = "freeze",
        Remove = "remove",
    }

    AnimationRestart {
        Always = "always",
        WhenNotActive = "whenNotActive",
        Never = "never",
    }

    CalcMode {
        Discrete = "discrete",
        Linear = "linear",
        Paced = "paced",
        Spline = "spline",
    }

    Additive {
        Replace = "replace",
        Sum = "sum",
    }

    Accumulate {
        None = "none",
        Sum = "sum",
    }

    TransformType {
        Translate = "translate",
        Scale = "scale",
        Rotate = "rotate",
        SkewX = "skewX",
        SkewY = "skewY",
    }

    MathVariant {
        Normal = "normal",
        Bold = "bold",
        Italic = "italic",
        BoldItalic = "bold-italic",
        DoubleStruck = "double-struck",
        BoldFraktur = "bold-fraktur",
        Script = "script",
        BoldScript = "bold-script",
        Fraktur = "fraktur",
        SansSerif = "sans-serif",
        BoldSansSerif = "bold-sans-serif",
        SansSerifItalic = "sans-serif-italic",
        SansSerifBoldItalic = "sans-serif-bold-italic",
        Monospace = "monospace",
        Initial = "initial",
        Tailed = "tailed",
        Looped = "looped",
        Stretched = "stretched",
    }

    MathDisplay {
        Block = "block",
        Inline = "inline",
    }

    OperatorForm {
        Prefix = "prefix",
        Infix = "infix",
        Postfix = "postfix",
    }

    /// Content type of an `<annotation>` or `<annotation-xml>` payload.
    AnnotationEncoding {
        TextHtml = "text/html",
        TextPlain = "text/plain",
        MathmlPresentation = "application/mathml-presentation+xml",
        MathmlContent = "application/mathml-content+xml",
        Svg = "image/svg+xml",
        Tex = "application/x-tex",
        OpenMath = "application/openmath+xml",
    }
}
