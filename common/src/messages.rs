//! 表示文言
//!
//! 画面とCLIで共有するユーザー向け文言（アラビア語）。

/// 画像処理中
pub const LOADING_IMAGE: &str = "جاري معالجة الصورة...";
/// 商品検索中
pub const LOADING_SEARCH: &str = "جاري البحث عن المنتج...";

/// 画像未選択
pub const UPLOAD_FIRST: &str = "يرجى تحميل صورة أولاً.";
/// 認識失敗（報告ページへ誘導）
pub const NOT_RECOGNIZED: &str = "لم يتم التعرف على المنتج. يرجى الذهاب إلى صفحة الإبلاغ لإضافته.";
/// 検索で見つからない（報告ページへ誘導）
pub const NOT_FOUND: &str = "لم يتم العثور على المنتج. يرجى الذهاب إلى صفحة الإبلاغ لإضافته.";

pub const ERROR_PREFIX: &str = "خطأ";
pub const CONNECTION_ERROR: &str = "خطأ في الاتصال بالخادم";
pub const SUGGESTIONS_ERROR: &str = "خطأ في جلب الاقتراحات";
pub const ALTERNATIVES_ERROR: &str = "خطأ في جلب البدائل";
pub const REPORT_ERROR: &str = "خطأ في إرسال البلاغ";
pub const NAME_REQUIRED: &str = "يرجى إدخال اسم المنتج.";

/// 画像認識の見出し
pub const RECOGNIZED_PREFIX: &str = "✅ تم التعرف على المنتج: ";
/// 名前検索の見出し
pub const PRODUCT_PREFIX: &str = "✅ المنتج: ";

pub const BOYCOTTED: &str = "مقاطعه";
pub const NOT_BOYCOTTED: &str = "غير مقاطعه";
pub const ALTERNATIVES_HEADER: &str = "🟢 البدائل المقترحة:";

/// 候補なし
pub const NO_RESULTS: &str = "لا توجد نتائج";

/// 写真モードの注意書き
pub const PHOTO_WARNING: &str = "التعرف بالصورة تجريبي وقد لا يتعرف على كل المنتجات. جرّب البحث بالاسم إن لم يظهر منتجك.";

/// ページ遷移オーバーレイのメッセージ
pub const TRANSITION_MESSAGE: &str = "قاطع لسا القضيه مخلصتش 😢";
