//! The twenty questions, in presentation order.
//!
//! Ordinals 14-20 form the late stage that breaks ties in the total tally.

use super::{Category, Question, QuizOption};

const fn opt(label: &'static str, category: Category) -> QuizOption {
    QuizOption { label, category }
}

pub(super) const QUESTIONS: [Question; 20] = [
    Question {
        ordinal: 1,
        prompt: "新しいことを学ぶ時、一番頭に入るのは？",
        options: &[
            opt("本や記事を読む（じっくり派）", Category::A),
            opt("図解やイラストを見る（一目瞭然）", Category::B),
            opt("動画や音声を聞く（ながら学習）", Category::E),
            opt("とりあえずやって失敗する（体当たり）", Category::G),
        ],
    },
    Question {
        ordinal: 2,
        prompt: "スマホの写真フォルダ、一番多いのは？",
        options: &[
            opt("推し・アイドル", Category::E),
            opt("ペット・動物", Category::F),
            opt("風景・綺麗な場所", Category::B),
            opt("美味しいご飯", Category::G),
        ],
    },
    Question {
        ordinal: 3,
        prompt: "夏休みの宿題、どう進めてた？",
        options: &[
            opt("計画的にコツコツ終わらせた", Category::A),
            opt("最終日に泣きながらやった", Category::E),
            opt("答えを写すか、やらないで開き直る", Category::C),
        ],
    },
    Question {
        ordinal: 4,
        prompt: "自分の部屋、どんな状態？",
        options: &[
            opt("どこに何があるか把握している", Category::C),
            opt("インテリアにはこだわっている", Category::B),
            opt("思い出の品が捨てられない", Category::F),
        ],
    },
    Question {
        ordinal: 5,
        prompt: "映画を見て感動！人にどう伝える？",
        options: &[
            opt("伏線回収が凄かった！と解説する", Category::A),
            opt("映像と音楽がヤバかった！と熱弁", Category::E),
            opt("とにかく泣けた、エモかった...", Category::F),
        ],
    },
    Question {
        ordinal: 6,
        prompt: "説明する時、よく使う言葉は？",
        options: &[
            opt("「論理的に言うと」「要するに」", Category::A),
            opt("「バーっと」「シュッと」などの擬音", Category::B),
            opt("「例えば〜」と例え話を出す", Category::G),
        ],
    },
    Question {
        ordinal: 7,
        prompt: "予想外のトラブル発生！どうする？",
        options: &[
            opt("原因を分析して解決策を練る", Category::D),
            opt("直感で「こっちだ！」と動く", Category::B),
            opt("誰かに相談する、助けを呼ぶ", Category::F),
        ],
    },
    Question {
        ordinal: 8,
        prompt: "単純作業（コピペなど）を続けるのは？",
        options: &[
            opt("無心になれるから意外と好き", Category::A),
            opt("3分で飽きる、無理", Category::E),
            opt("どうにかして自動化できないか考える", Category::C),
        ],
    },
    Question {
        ordinal: 9,
        prompt: "人との会話で気になるのは？",
        options: &[
            opt("話の矛盾や事実関係", Category::D),
            opt("相手の表情や声のトーン", Category::F),
            opt("話のオチや面白さ", Category::E),
        ],
    },
    Question {
        ordinal: 10,
        prompt: "「完璧主義」って言われる？",
        options: &[
            opt("細部までこだわらないと気が済まない", Category::A),
            opt("全体の雰囲気が良ければOK", Category::B),
            opt("80点でいいから早く終わらせたい", Category::C),
        ],
    },
    Question {
        ordinal: 11,
        prompt: "得意なのはどっち？",
        options: &[
            opt("0から1を生み出す（新規アイデア）", Category::B),
            opt("1を100にする（改善・拡大）", Category::G),
        ],
    },
    Question {
        ordinal: 12,
        prompt: "LINEやメールの返信は？",
        options: &[
            opt("文章でしっかり書くのが好き", Category::A),
            opt("スタンプや短文で済ませがち", Category::E),
        ],
    },
    Question {
        ordinal: 13,
        prompt: "嘘をつくのは得意？",
        options: &[
            opt("絶対にバレない自信がある", Category::D),
            opt("顔に出るから無理", Category::F),
            opt("場を盛り上げるためなら多少は", Category::E),
        ],
    },
    Question {
        ordinal: 14,
        prompt: "音楽を聴くとき重視するのは？",
        options: &[
            opt("歌詞の意味・世界観", Category::A),
            opt("メロディ・リズム・ノリ", Category::E),
        ],
    },
    Question {
        ordinal: 15,
        prompt: "AIを「相棒」にするなら？",
        options: &[
            opt("命令を完璧にこなすロボット", Category::C),
            opt("人間味があって相談できる奴", Category::F),
        ],
    },
    Question {
        ordinal: 16,
        prompt: "他人の間違いを見つけたら？",
        options: &[
            opt("指摘して正してあげる", Category::A),
            opt("傷つけないように遠回しに言う", Category::F),
            opt("面倒だからスルーする", Category::C),
        ],
    },
    Question {
        ordinal: 17,
        prompt: "情報を調べる時、信頼するのは？",
        options: &[
            opt("公的機関のデータ・論文", Category::D),
            opt("SNSの口コミ・評判", Category::E),
            opt("信頼できる人のオススメ", Category::G),
        ],
    },
    Question {
        ordinal: 18,
        prompt: "AIで100万円稼ぐなら？",
        options: &[
            opt("自分の名前で有名になって稼ぐ", Category::E),
            opt("すごい作品を作って販売する", Category::B),
            opt("全自動の仕組みを作って放置で稼ぐ", Category::C),
        ],
    },
    Question {
        ordinal: 19,
        prompt: "今、一番「面倒だ」と感じていることは？",
        options: &[
            opt("考えること（決断疲れ）", Category::F),
            opt("作業すること（単純労働）", Category::C),
        ],
    },
    Question {
        ordinal: 20,
        prompt: "最終的に手に入れたいのは？",
        options: &[
            opt("圧倒的な知能（脳の拡張）", Category::D),
            opt("神のような創造力（手足の拡張）", Category::B),
            opt("働かない自由（時間の拡張）", Category::C),
            opt("人からの感謝・信頼（心の拡張）", Category::G),
        ],
    },
];
