/// Tones that get a generated record for every syllable of the table.
pub const TONES: [u32; 4] = [1, 2, 3, 4];

/// Neutral tone forms of ü finals that the regular tone grid does not produce,
/// as (shortcut, phrase). They are emitted as is after the regular records.
pub const SPECIAL_CASES: [(&str, &str); 4] = [
    ("nv5", "nü"),
    ("nve5", "nüe"),
    ("lv5", "lü"),
    ("lve5", "lüe"),
];

pub const PLIST_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<array>
"#;

pub const PLIST_FOOTER: &str = "</array>\n</plist>\n";

pub const PLIST_KEY_PHRASE: &str = "phrase";
pub const PLIST_KEY_SHORTCUT: &str = "shortcut";

pub const DB_SCHEMA: &str = r#"

PRAGMA user_version = 1;
/* One row per text replacement, rank keeps the order in which the records were generated */
CREATE TABLE IF NOT EXISTS "text_replacement" (
	"id" INTEGER NOT NULL UNIQUE,
	"shortcut" TEXT NOT NULL,
	"phrase" TEXT NOT NULL,
	"rank" INTEGER NOT NULL,
	PRIMARY KEY("id")
);

CREATE UNIQUE INDEX IF NOT EXISTS "text_replacement_index_0"
ON "text_replacement" ("shortcut");

"#;

/*
Pinyin syllable chart, one row per initial (the last row holds the syllables without initial).
The first entry of each row is the row label and repeats a syllable of the same row.
Syllables are separated by whitespace, ü is written as is and becomes v in the shortcut.
*/
pub const SYLLABLE_GRID: &str = "
bo	ba	bo	bai	bei	bao	ban	ben	bang	beng	bu	bi	bie	biao	bian	bin	bing
po	pa	po	pai	pei	pao	pou	pan	pen	pang	peng	pu	pi	pie	piao	pian	pin	ping
mo	ma	mo	me	mai	mei	mao	mou	man	men	mang	meng	mu	mi	mie	miao	miu	mian	min	ming
fo	fa	fo	fei	fou	fan	fen	fang	feng	fu
de	da	de	dai	dei	dao	dou	dan	den	dang	deng	dong	du	duo	dui	duan	dun	di	dia	die	diao	diu	dian	ding
te	ta	te	tai	tei	tao	tou	tan	tang	teng	tong	tu	tuo	tui	tuan	tun	ti	tie	tiao	tian
ne	na	ne	nai	nei	nao	nou	nan	nen	nang	neng	nong	nu	nuo	nuan	nun	ni	nie	niao	niu	nian	niang	nin	ning	nü	nüe
le	la	le	lai	lei	lao	lou	lan	lang	leng	long	lu	luo	luan	lun	li	lia	lie	liao	liu	lian	liang	lin	ling	lü	lüe
ge	ga	ge	gai	gei	gao	gou	gan	gen	gang	geng	gong	gu	gua	guo	guai	gui	guan	guang	gun
ke	ka	ke	kai	kei	kao	kou	kan	ken	kang	keng	kong	ku	kua	kuo	kuai	kui	kuan	kuang	kun
he	ha	he	hai	hei	hao	hou	han	hen	hang	heng	hong	hu	hua	huo	huai	hui	huan	huang	hun
zi	za	ze	zai	zei	zao	zou	zan	zen	zang	zeng	zong	zu	zuo	zui	zuan	zun	zi
ci	ca	ce	cai	cao	cou	can	cen	cang	ceng	cong	cu	cuo	cui	cuan	cun	cin
si	sa	se	sai	sao	sou	san	sen	sang	seng	song	su	suo	sui	suan	sun	si
zhi	zha	zhe	zhai	zhei	zhao	zhou	zhan	zhen	zhang	zheng	zhong	zhu	zhua	zhuo	zhuai	zhui	zhuan	zhuang	zhun	zhi
chi	cha	che	chai	chao	chou	chan	chen	chang	cheng	chong	chu	chua	chuo	chuai	chui	chuan	chuang	chun	chi
shi	sha	she	shai	shei	shao	shou	shan	shen	shang	sheng	shu	shua	shuo	shuai	shui	shuan	shuang	shun	shi
ri	re	rao	rou	ran	ren	rang	reng	rong	ru	rua	ruo	rui	ruan	run	ri
ji	ji	jia	jie	jiao	jiu	jian	jiang	jin	jing	jiong	ju	jue	juan	jun
qi	qi	qia	qie	qiao	qiu	qian	qiang	qin	qing	qiong	qu	que	quan	qun
xi	xi	xia	xie	xiao	xiu	xian	xiang	xin	xing	xiong	xu	xue	xuan	xun
a	o	e	ai	ei	ai	ao	ou	an	en	ang	ong	wu	wa	wo	wai	wei	wan	wang	wen	weng	yi	ya	ye	yao	you	yan	yang	yin	ying	yong	yu	yue	yuan	yun
";
