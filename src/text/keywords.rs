use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::text::normalize;

/// High-frequency function words and generic verbs dropped from keyword sets
const STOPWORDS: &[&str] = &[
    "的", "了", "在", "是", "我", "有", "和", "就", "不", "人", "都", "一", "一个", "上", "也", "很", "到",
    "说", "要", "去", "你", "会", "着", "没有", "看", "好", "自己", "这", "那", "里", "就是", "还是", "因为",
    "所以", "但是", "可能", "可以", "需要", "进行", "通过", "作为", "比如", "例如", "使用", "利用", "实现", "完成",
    "达到", "得到", "产生", "形成", "构成", "组成", "成为", "变成", "变化", "改变", "改进", "改善", "优化", "提升",
    "提高", "增强", "加强", "扩大", "扩展", "发展", "进步", "前进", "推进", "推动", "促进", "加速", "加快", "增加",
    "增长", "增多", "减少", "降低", "下降", "缩小", "压缩", "简化", "精简", "删除", "去除", "消除", "避免", "防止",
    "预防", "保护", "维护", "保持", "维持", "继续", "持续", "坚持", "支持", "帮助", "协助", "辅助", "配合", "合作",
    "协作", "协调", "统一", "一致", "相同", "类似", "相近", "相关", "联系", "关系", "关联", "连接", "链接", "结合",
    "整合", "融合", "混合", "合并", "组合", "集合", "集中", "聚集", "聚积", "积累", "积蓄", "储存", "保存", "保留",
    "剩余", "多余", "超过", "超越", "胜出", "胜利", "成功", "失败", "错误", "失误", "失去", "丢失", "缺失", "缺少",
    "缺乏", "不足", "不够", "不满", "不足够", "不充分", "不完全", "不完整", "不全面", "不详细", "不具体", "不明确", "不清楚",
    "不清晰", "不含糊", "不模糊", "不混乱", "不复杂", "不简单", "不容易", "不困难", "不麻烦", "不费力", "不费劲", "不辛苦",
    "不劳累", "不疲惫", "不疲倦", "不累", "不艰难", "不艰苦", "不难过", "不难受", "不舒服", "不舒适", "不惬意", "不自在",
    "不自由", "不轻松", "不悠闲", "不忙", "不紧张", "不焦虑", "不担心", "不害怕", "不恐惧", "不惊慌", "不慌张", "不着急",
    "不急躁", "不烦躁", "不烦恼", "不苦恼", "不痛苦", "不悲伤", "不伤心", "不失望", "不绝望", "不沮丧", "不气馁", "不灰心",
    "不泄气", "不妥协", "不放弃", "不屈服", "不投降", "不服输", "不认输", "不服气", "不甘心", "不情愿", "不愿意", "不喜欢",
    "不爱", "不爱好", "不感兴趣", "不关心", "不在乎", "不在意", "不重视", "不尊重", "不尊敬", "不敬", "不礼貌", "不文明",
    "不友好", "不和善", "不亲切", "不热情", "不热心", "不积极", "不主动", "不被动", "不消极", "不怠慢", "不懈怠", "不懒惰",
    "不懒", "不勤快", "不勤奋", "不努力", "不刻苦", "不认真", "不仔细", "不细心", "不谨慎", "不小心", "不留意", "不注意",
    "不关注", "不专心", "不专注", "不投入", "不深入", "不深刻", "不透彻", "不细致", "不精密", "不精确", "不准确", "不正确",
    "不错误", "不对", "不假", "不伪", "不虚假", "不真实", "不实在", "不实际", "不实用", "不实惠", "不经济", "不划算",
    "不值得", "不应当", "不应该", "不合适", "不适宜", "不适当", "不恰当", "不正好", "不恰好", "不刚好", "不巧合", "不偶然",
    "不突然", "不意", "不料", "不想", "不到", "不认为", "不觉得", "不感觉", "不察觉", "不发觉", "不意识到", "不认识",
    "不了解", "不理解", "不明白", "不懂", "不知", "不晓", "不道", "不晓得", "不熟悉", "不熟练", "不精通", "不擅长", "不善于",
    "不会", "不能", "不可以", "不可", "不行", "不成", "不好", "不佳", "不良", "不善", "不妙",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOPWORDS.iter().copied().collect());

/// Minimum keyword length in chars
const MIN_KEYWORD_CHARS: usize = 2;

pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

/// Extract keywords from free text.
///
/// Splits on anything that is not a letter, digit or CJK ideograph, keeps
/// words of at least two chars that are not stopwords, and drops repeats
/// while keeping first-seen order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let mut seen = HashSet::new();

    normalized
        .split(' ')
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
        .filter(|word| !is_stopword(word))
        .filter(|word| seen.insert(*word))
        .map(str::to_string)
        .collect()
}

/// True when either keyword contains the other
#[inline]
pub fn keywords_overlap(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}
