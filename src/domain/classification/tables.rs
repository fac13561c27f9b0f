//! Hand-audited domain lists. Corrections come from the domain audit report.
//!
//! The three exact-match lists are disjoint; `tests::exact_lists_are_disjoint` guards that.

/// URL substrings that mark a result as a service listing regardless of host.
pub(super) const COMMERCIAL_URL_PATTERNS: &[&str] = &[
    "yandex.ru/maps",
    "yclients.com/nail-salon",
    "yclients.com/master",
];

/// URL substrings for editorial or media sections hosted on otherwise commercial domains.
pub(super) const INFORMATIONAL_URL_PATTERNS: &[&str] = &[
    "yandex.ru/images",
    "yandex.ru/video",
    "yclients.com/journal",
    "nails-up.ru/blog",
];

/// Salons, clinics, booking platforms and service aggregators.
pub(super) const COMMERCIAL_DOMAINS: &[&str] = &[
    "2gis.ru",
    "zoon.ru",
    "profi.ru",
    "uslugi.yandex.ru",
    "www.avito.ru",
    "m.avito.ru",
    "youla.ru",
    "www.yell.ru",
    "spb.napopravku.ru",
    "napopravku.ru",
    "prodoctorov.ru",
    "spb.youdo.com",
    "barb.pro",
    "spb.krasotaimedicina.ru",
    "krasotaimedicina.ru",
    "www.krasotaimedicina.ru",
    "dikidi.net",
    "dikidi.ru",
    "beauty.dikidi.ru",
    "widget.sonline.su",
    "speterburg.biglion.ru",
    "spb.boombate.com",
    "kistochki.ru",
    "pilkinail.ru",
    "4hands.ru",
    "4hands-lp.ru",
    "myzefirka.ru",
    "www.kleos.ru",
    "ras4eshi.ru",
    "sierra-nails.ru",
    "liksnail.ru",
    "nogtinogti.ru",
    "gurumanicura.ru",
    "amalfibeauty.ru",
    "llmanikur.ru",
    "karamel-nail.ru",
    "magnetic-salon.ru",
    "podolog78.ru",
    "nailclinic.ru",
    "rocco-barocco.ru",
    "gastronombeauty.ru",
    "salon-leona.ru",
    "ponynail.ru",
    "polubvipiter.ru",
    "polubvi.su",
    "beauty-set.ru",
    "www.cosmetologylife.ru",
    "maleynail.ru",
    "jbextension.ru",
    "citynails.studio",
    "olacenters.com",
    "max4u.ru",
    "eleven-nail.ru",
    "self-spb.ru",
    "viela-manikyur.ru",
    "veran-lash.ru",
    "artistrynail.ru",
    "superart.spb.ru",
    "beautytoday.spb.ru",
    "isterika.me",
    "www.drugoymoneycure.ru",
    "hochu.me",
    "matreshkastudio.ru",
    "salonmatreshka.ru",
    "tsvet-nails.ru",
    "greenpark-spb.ru",
    "klukva-nails.ru",
    "salonmanit.ru",
    "posh-nails.ru",
    "houseofnails.ru",
    "kbeauty-studio.ru",
    "idol-cut.ru",
    "sk-12m.ru",
    "mylagom.ru",
    "driadaspb.ru",
    "tsarapki.ru",
    "toffynails.ru",
    "zakanail.ru",
    "mecca.ru",
    "sodanails.ru",
    "supernailspb.ru",
    "aurora-nails.ru",
    "lak-nozhnici.ru",
    "p-n.spb.ru",
    "nailtitu.ru",
    "rednails-studio.ru",
    "mywonderlook.ru",
    "mylak.ru",
    "lakcherie.ru",
    "lseven.ru",
    "setmanicure.ru",
    "www.apple-nail.ru",
    "pinklemon.ru",
    "lacoco.online",
    "nikor-salon.ru",
    "junglemanicure.ru",
    "mancaveclub.ru",
    "volkovabeauty.com",
    "saharvosk.ru",
    "www.sskluxury.ru",
    "www.spnail.ru",
    "cj-co.ru",
    "check-in-beauty.ru",
    "vpechatleniya.ru",
    "flamynails.ru",
    "spb.grushka.space",
    "www.formanails.ru",
    "lime-krasota.ru",
    "salonorhideya.ru",
    "fornailsstudio.ru",
    "www.orhida.ru",
    "www.orhida.com",
    "podohomespb.ru",
    "lcnprof.ru",
    "prostonail.com",
    "www.smclinic.ru",
    "podologiya.clinic",
    "podolog112.ru",
    "tochkafamily.ru",
    "terstyle.ru",
    "xn--90a1af.xn--80aaa6bkfrbe5b.xn--p1ai",
    "www.masters-app.ru",
    "maysalon.ru",
    "nailstogo.ru",
    "www.malinina-studio.ru",
    "tokueva.ru",
    "youdo.com",
    "palchiki.com",
    "ll-moskovskiy.ru",
    "manicureexpress.ru",
    "rarobeauty.ru",
    "marianna-aleksandrova.ru",
    "misslisse.ru",
    "serebro-nail-studio.ru",
    "miapol.ru",
    "salonkl.ru",
    "www.blessmynails.ru",
    "only-nails.pro",
    "magicroom-nm.ru",
    "topnails.studio",
    "nailmaker.bar",
    "www.emimanicure.ru",
    "kogti.studio",
    "xnails.pro",
    "hardys.one",
    "manikur-spb.ru",
    "beauty-spot.ru",
    "studiokl-spb.ru",
    "zer.ru",
    "handy.moscow",
    "base-nail.ru",
    "dj-beauty.ru",
    "saintpierre.beauty",
    "www.1nailstudio.ru",
    "studio.beauty.nails.tilda.ws",
    "www.nikolinazabota.ru",
    "martnails.ru",
    "nailburo.ru",
    "candylovely.ru",
    "mirt.me",
    "esthetic-spb.ru",
    "fornail.ru",
    "modmesto.ru",
    "www.socium-sokol.ru",
    "apelsinsalon.ru",
    "dikidi.app",
    "beauty.dikidi.net",
    "www.fresha.com",
    "krace.ru",
    "landing.mastersapp.ru",
    "likengo.ru",
    "piter.now",
    "www.frendi.ru",
    "sankt-peterburg.spravochnikov.ru",
    "persona-dubai.com",
    "sugar-saloon.com",
    "sugar-istanbul.com",
    "persona-antalya.com",
    "nailsunny.ae",
    "europe-tc.ru",
    "trk-gulliver.ru",
    "id-clinic.ru",
    "mc21.ru",
    "doct.ru",
    "e-rusina.ru",
    "podologchel.ru",
    "podoprof.ru",
    "nails-up.ru",
    "www.onclinic.ru",
    "spb.service-centers.ru",
];

/// Product stores and marketplaces. These never count towards commercial intent.
pub(super) const ECOMMERCE_DOMAINS: &[&str] = &[
    "www.ozon.ru",
    "www.wildberries.ru",
    "market.yandex.ru",
    "aliexpress.ru",
    "www.sima-land.ru",
    "www.100sp.ru",
    "www.galacentre.ru",
    "goldapple.ru",
    "rivegauche.ru",
    "www.letu.ru",
    "randewoo.ru",
    "imkosmetik.com",
    "krasotkapro.ru",
    "www.krasotkapro.ru",
    "www.beautyshop.ru",
    "www.beauty-shop.ru",
    "sterille-store.ru",
    "masura.ru",
    "nails-mag.ru",
    "gelopt.ru",
    "neonail.ru",
    "odiva.ru",
    "www.hameleon-market.ru",
    "nailico.ru",
    "nail-republic.shop",
    "ingardenshop.ru",
    "ecolat.shop",
    "aravia-prof.ru",
    "parisnail.ru",
    "frenchnails.ru",
    "lcnshop.ru",
    "myslitsky-nail.ru",
    "palitra24.ru",
    "nailgoods.ru",
    "kosmetika-proff.ru",
    "gurunail.ru",
    "esteticshop.ru",
    "50den.ru",
    "algebrabeauty.ru",
    "chistovie.ru",
    "kmiz-online.ru",
    "p-shine.ru",
    "matsumi.shop",
    "japanshop.spb.ru",
    "cosmonail.art",
    "smetico.ru",
    "www.prosalon-store.ru",
    "beautyempire.shop",
    "lemurprof.ru",
    "profreshenie.net",
    "verakso.ru",
    "www.alltime.ru",
    "www.585zolotoy.ru",
    "zolotoy.ru",
    "www.lamoda.ru",
    "www.eldorado.ru",
    "www.fitmost.ru",
    "dolyame.ru",
    "strong-korea.ru",
    "www.proficosmetics.ru",
    "emi-shop.ru",
    "www.podrygka.ru",
    "kristallnails.ru",
    "promanicur.ru",
    "www.starnail-shop.ru",
    "www.metzger.ru",
    "www.medkv.ru",
    "www.vsalon24.ru",
    "tnlpro.com",
    "strong-nails.ru",
    "nailbox.ru",
    "emi-official.ru",
    "marathon-saeyang.ru",
    "pili-shop.ru",
    "spb.nail-industry.ru",
    "proficana.ru",
    "www.planet-nails.ru",
    "www.sunuv.su",
    "topshopnails.ru",
    "spb.nail-drill.ru",
    "integral54.ru",
    "okinail.ru",
    "divua-cosmetic.ru",
    "www.rstart.ru",
    "www.artex.ltd",
    "www.kaneprofessional.com",
    "pnbshop.com",
    "beauty-prestige.ru",
    "medlovestore.ru",
    "plastek-shop.ru",
    "grattol-official.ru",
    "elize.ru",
    "www.nogtishop.ru",
    "www.mebelit-prof.ru",
    "planeta-sirius.spb.ru",
    "www.vseinstrumenti.ru",
    "cosmetic.magnit.ru",
    "donajerdona.ru",
    "www.officemag.ru",
    "rudesignshop.ru",
    "sims-market.ru",
    "dibidishop.ru",
    "globalfashion.ru",
    "www.imin.ru",
    "usmall.ru",
    "beauty-business72.ru",
    "katmarket.ru",
    "salon312.ru",
];

/// Blogs, magazines, social networks, reference sites and search verticals.
pub(super) const INFORMATIONAL_DOMAINS: &[&str] = &[
    "ru.pinterest.com",
    "pinterest.com",
    "www.pinterest.com",
    "www.pinterest.ru",
    "vk.com",
    "vk.link",
    "ok.ru",
    "m.ok.ru",
    "t.me",
    "www.tiktok.com",
    "tiktok.com",
    "pikabu.ru",
    "www.youtube.com",
    "youtube.com",
    "rutube.ru",
    "ru.wikipedia.org",
    "wikipedia.org",
    "ru.wikihow.com",
    "dzen.ru",
    "www.dzen.ru",
    "vc.ru",
    "dtf.ru",
    "tenchat.ru",
    "otvet.mail.ru",
    "www.bolshoyvopros.ru",
    "lenta.ru",
    "www.novochag.ru",
    "www.marieclaire.ru",
    "style.rbc.ru",
    "www.rbc.ru",
    "www.grazia.ru",
    "lady.mail.ru",
    "deti.mail.ru",
    "hi-tech.mail.ru",
    "lisa.ru",
    "www.woman.ru",
    "thegirl.ru",
    "tv-gubernia.ru",
    "www.thevoicemag.ru",
    "t-j.ru",
    "www.fontanka.ru",
    "www.gazetametro.ru",
    "life.ru",
    "www.1obl.ru",
    "www.cosmo.ru",
    "www.glamour.ru",
    "www.wonderzine.com",
    "www.kp.ru",
    "www.pravda.ru",
    "www.chita.ru",
    "aif.ru",
    "aif.by",
    "ria.ru",
    "rg.ru",
    "iz.ru",
    "ura.news",
    "altapress.ru",
    "www.mk.ru",
    "www.nn.ru",
    "klops.ru",
    "72.ru",
    "www.vesti.ru",
    "www.m24.ru",
    "www.gazeta.ru",
    "7days.ru",
    "daily.afisha.ru",
    "peopletalk.ru",
    "krsk.aif.ru",
    "eaomedia.ru",
    "www.hibiny.ru",
    "www.vokrugsveta.ru",
    "irecommend.ru",
    "otzovik.com",
    "spb.flamp.ru",
    "spb.ayle.ru",
    "markakachestva.ru",
    "www.thesymbol.ru",
    "theblueprint.ru",
    "www.yapokupayu.ru",
    "weddywood.ru",
    "tornado-fan.ru",
    "sinail.ru",
    "www.baby.ru",
    "www.babyblog.ru",
    "burdastyle.ru",
    "makeup.ru",
    "list-kalendarya.ru",
    "media.halvacard.ru",
    "flacon-magazine.com",
    "www.boyarovweddings.ru",
    "beautyhack.ru",
    "www.beautyinsider.ru",
    "www.kleo.ru",
    "sunmag.me",
    "super.ru",
    "voyagemagazine.ru",
    "sheglowvibe.com",
    "du.moscow",
    "www.byrdie.com",
    "www.whowhatwear.com",
    "star-tex.ru",
    "umagazine.ru",
    "www.kinoafisha.info",
    "istylemag.com",
    "lifehacker.ru",
    "woman.rambler.ru",
    "www.anna-key.ru",
    "modnail.ru",
    "nailsworld.ru",
    "kosmetista.ru",
    "rosilak.ru",
    "opzia.ru",
    "mirkosm.ru",
    "nemirova.pro",
    "mymanikuroff.ru",
    "ash2o.ru",
    "hoods.anvikor.ru",
    "unogel.ru",
    "lovely-nails.pro",
    "plnail.ru",
    "trendory.ru",
    "sakwa.ru",
    "amarylis.ru",
    "cosmake.by",
    "1estet.com",
    "lkrasota.ru",
    "sprosivracha.com",
    "citilab.ru",
    "apteka.ru",
    "doctu.ru",
    "medaboutme.ru",
    "enterosgel.ru",
    "suprastinex.ru",
    "euromednsk.ru",
    "www.invitro.ru",
    "probolezny.ru",
    "nadejdamed.ru",
    "www.medicina.ru",
    "zn48.ru",
    "progen.ru",
    "w-stom.ru",
    "podologe.ru",
    "www.cnmt.ru",
    "mknc.ru",
    "stolichki.ru",
    "72.rospotrebnadzor.ru",
    "71.rospotrebnadzor.ru",
    "73.rospotrebnadzor.ru",
    "www.sostav.ru",
    "www.reg.ru",
    "salon1c.ru",
    "direct.yandex.ru",
    "career.hh.ru",
    "www.sravni.ru",
    "edu.sravni.ru",
    "e-kontur.ru",
    "stilito.ru",
    "burlesque-nail.ru",
    "ru.freepik.com",
    "freepik.com",
    "www.shutterstock.com",
    "www.istockphoto.com",
    "astrohelper.ru",
    "sakh.online",
    "skysages.com",
    "sputnik.by",
    "goroskop-365.ru",
    "silaprimet.ru",
    "art-profi.com",
    "www.r-ulybka.ru",
    "www.yuga.ru",
    "slight.by",
    "yandex.ru",
    "tr-page.yandex.ru",
    "tel.yandex.by",
    "reviews.yandex.ru",
    "islam.global",
    "islam.ru",
    "umma.ru",
    "m.islam-today.ru",
    "azan.kz",
    "www.kinopoisk.ru",
    "finuslugi.ru",
    "life.akbars.ru",
    "prosto.rabota.ru",
    "subbota.tv",
    "premier.one",
    "eva.ru",
    "spb.cian.ru",
    "spacesbc.ru",
    "www.litres.ru",
    "www.livelib.ru",
    "perspektivadpo.ru",
    "aelita-imidg.ru",
    "medprofexpert.ru",
    "medcentr-sitimed.ru",
    "propodo.ru",
    "xpnailfest.ru",
    "stellarchampionships.ru",
    "gratefulhearts.ru",
    "forumlands.ru",
    "tgstat.ru",
    "tlgbot.ru",
    "tgramsearch.com",
    "beautybro.ru",
    "www.kommersant.ru",
    "mama.ru",
    "www.kiz.ru",
    "spid.ru",
    "xn--80ajkddjlmjcmcn7jua.xn--p1ai",
    "xn--b1acd3aibadcc7a8h.xn--p1ai",
    "p-shine.co.jp",
    "taplink.cc",
    "safina.by",
    "www.nur.kz",
    "www.sb.by",
    "bpw.style",
    "apps.apple.com",
    "www.rustore.ru",
    "club.dns-shop.ru",
    "callfilter.app",
    "app.beautyagent.ru",
    "zakon.ru",
    "journal.sovcombank.ru",
    "www.airtasker.com",
    "emionline.ru",
    "www.zdrav.ru",
    "beauty-business.ru",
    "madnails.ru",
    "valera.ai",
    "dancecolor.ru",
    "sinonim.org",
    "gramota.ru",
    "frazbor.ru",
    "fonetika.su",
    "kartaslov.ru",
    "vslovarike.ru",
    "fonetic.textologia.ru",
    "multiurok.ru",
    "www.graycell.ru",
    "poncy.ru",
    "makeword.ru",
    "scanwordhelper.ru",
    "translate.academic.ru",
    "www.translate.ru",
    "context.reverso.net",
    "odnokor.ru",
    "ru.wiktionary.org",
    "printut.com",
    "supa.ru",
    "drawcon.ru",
    "smmplanner.com",
    "vechkasov.ru",
    "sky.pro",
    "spb.hh.ru",
    "office.ru",
    "alfabank.ru",
    "kurs.alfabank.ru",
    "www.consultant.ru",
    "www.regberry.ru",
    "astral.ru",
    "www.vtb.ru",
    "kontur.ru",
    "its.1c.ru",
    "patent.nalog.ru",
    "okved.tochka.com",
    "konsol.pro",
    "spark.ru",
    "pravoved.ru",
    "pos-center.ru",
    "russia.gorodrabot.ru",
    "sankt-peterburg.gorodrabot.ru",
    "spb.superjob.ru",
    "promo.yookassa.ru",
    "colbacolorbar.ru",
    "tochka-krasoty.com",
    "www.probeautyspace.com",
    "nailart.online",
    "lesnails.pro",
    "masterakrasoti.ru",
    "msk.liksnail.ru",
    "4uprof.ru",
    "nange.ru",
    "arenaseo.ru",
    "blog.eleven-nail.ru",
    "nzh.by",
    "eleganzavogue.com",
    "filin-school.ru",
    "skem.ru",
    "socrimea.ru",
    "unilook-collection.ru",
    "heroine.ru",
    "shtuchki.pro",
    "tersta.ru",
    "tobiash.ru",
    "clatch.app",
    "domix.pro",
    "gigi.click",
    "x-medica.ru",
    "ecolespb.ru",
    "advancenails.ru",
    "prestige-kurs.ru",
    "shkola-krasoti.ru",
    "kurs-spb.ru",
    "onskills.ru",
    "perfectspb.com",
    "tehstd.ru",
    "kubshm.ru",
    "ncpo.ru",
    "postupi.online",
    "stepik.org",
    "www.razvitie-manikur.ru",
    "www.asgol.pro",
    "adems.ru",
    "foxservice.moscow",
    "z-v-c.ru",
    "uc-asor.ru",
    "spb.victoryco.ru",
    "xn--80ajpfhbgomfh1b.xn--p1ai",
    "xn--l1aks.74.xn--b1aew.xn--p1ai",
    "ohnice.ru",
    "emi-courses.ru",
    "74.ru",
    "ngs.ru",
    "sakhalinmedia.ru",
    "pg21.ru",
    "www.rostov.kp.ru",
    "ekb.plus.rbc.ru",
    "www.sobaka.ru",
    "doctorpiter.ru",
    "www.5-tv.ru",
    "www.1tv.ru",
    "www.pravilamag.ru",
    "peterburg2.ru",
    "lgz.ru",
    "www.krsk.kp.ru",
    "ircity.ru",
    "moe-online.ru",
    "newstracker.ru",
    "78.ru",
    "29.ru",
    "v1.ru",
    "moslenta.ru",
    "1yar.tv",
    "www.gorodche.ru",
    "vesti-yamal.ru",
    "finance.rambler.ru",
    "realty.rbc.ru",
    "news.rambler.ru",
    "www.psychologies.ru",
    "food.ru",
    "www.parents.ru",
    "www.mentoday.ru",
    "www.wmj.ru",
    "www.elle.com",
    "www.allure.com",
    "thefair.ru",
    "femmie.ru",
    "spletnik.ru",
    "lady.pravda.ru",
    "twizz.ru",
    "www.gastronom.ru",
    "585svadba.ru",
    "www.wedding-magazine.ru",
    "porusski.me",
    "megapteka.ru",
    "doctor.rambler.ru",
    "klinikabudzdorov.ru",
    "meduniver.com",
    "gemotest.ru",
    "health.mail.ru",
    "www.mediasphera.ru",
    "souz-med.ru",
    "cmo-med.ru",
    "mag.103.by",
    "oncokdc.ru",
    "viterramed.ru",
    "muzgkb.ru",
    "www.smclinic-spb.ru",
    "medlineservice.ru",
    "klinikaluch.ru",
    "hemonc.ru",
    "comfort.sovamed.ru",
    "elamed.com",
    "dgp6-omsk.ru",
    "www.niioncologii.ru",
    "spb.benevobis.su",
    "plasticacenter.ru",
    "unionclinic.ru",
    "www.garant.ru",
    "sudact.ru",
    "fbuz11.ru",
    "www.59fbuz.ru",
    "kamenskiy.gosuslugi.ru",
    "pskovkvd.gosuslugi.ru",
    "to.orb.ru",
    "bz.orb.ru",
    "spmag.ru",
    "islamdag.ru",
    "cmn.kz",
    "islam.by",
    "daura.link",
    "mom.life",
    "ummet.kz",
    "islam.uz",
    "dizayn-buro.ru",
    "design-in.ru",
    "en.wikipedia.org",
    "ru.ruwiki.ru",
    "www.wikihow.com",
    "www.ivi.ru",
    "hd.kinopoisk.ru",
    "www.kino-teatr.ru",
    "www.film.ru",
    "genius.com",
    "hitmos.me",
    "my.mail.ru",
    "music.yandex.ru",
    "vkvideo.ru",
    "300.ya.ru",
    "shytok.net",
    "www.anekdot.ru",
    "citaty.info",
    "www.inpearls.ru",
    "vse-shutochki.ru",
    "anekdoty.ru",
    "www.pozdravok.com",
    "www.litprichal.ru",
    "www.pozdravik.ru",
    "stihi.ru",
    "uquiz.com",
    "trikky.ru",
    "emojiterra.com",
    "nickfinder.com",
    "www.playground.ru",
    "thesimsclub.net",
    "sims4pack.ru",
    "www.thesimsresource.com",
    "www.thegamer.com",
    "www.simsfinds.com",
    "www.astromeridian.ru",
    "enigma-project.ru",
    "vedmochka.net",
    "rivendel.ru",
    "my-calend.ru",
    "beautydream.ru",
    "horoscopes.rambler.ru",
    "newyear.novochag.ru",
    "shedevrum.ai",
    "revvy.ai",
    "girafffe.ru",
    "pro-promotion.ru",
    "martrending.ru",
    "intrigue.dating",
    "evgeniykot.ru",
    "sloganza.ru",
    "klnv.ru",
    "arnica-crm.ru",
    "xn--80aapgyievp4gwb.xn--p1ai",
    "xn--90aauzrd9dq.xn--p1ai",
    "ppt-online.org",
    "kudago.com",
    "flowwow.com",
    "www.freepik.com",
    "www.vecteezy.com",
    "artovrag.com",
    "realty.yandex.ru",
    "postila.ru",
    "forum.aromarti.ru",
    "forum.baby.ru",
    "u-mama.ru",
    "www.guitaristka.ru",
    "www.ardl.ru",
    "milliard.tatar",
    "www.klerk.ru",
    "www.expertcen.ru",
    "journal.citilink.ru",
    "dvesoroki.by",
    "redsale.by",
    "makeup.kz",
    "blog.olx.kz",
    "dnr.red",
    "7hands.com",
    "adme.media",
    "habr.com",
    "naked-science.ru",
    "rozetked.me",
    "burninghut.ru",
    "web.archive.org",
    "reads.alibaba.com",
    "le-kole.ru",
    "www.www.nayada-magazin.com",
    "www.nayada-magazin.com",
    "modernus.ru",
    "www.kristally-strazy.ru",
    "pro-vzglyad.ru",
    "mel.fm",
    "prostie-r.ru",
    "monplezir.shop",
    "gnk-shop.ru",
    "odezhda.guru",
    "app.emionline.ru",
    "uteka.ru",
    "yypronail.ru",
    "www.xn--80aaufgddxe3b6cd.xn--p1ai",
    "muzgkb1.ru",
    "mst.center",
    "www.runsom.com",
    "www.livemaster.ru",
    "pikinail.ru",
    "sunlight.net",
];

/// Templated landing pages on salon platforms.
pub(super) const COMMERCIAL_DOMAIN_SUFFIXES: &[&str] = &[
    ".clients.site",
    ".orgs.biz",
    ".gorod812salon.ru",
    ".sodanails.ru",
];

pub(super) const INFORMATIONAL_DOMAIN_SUFFIXES: &[&str] = &[
    ".pinterest.com",
    ".pinterest.com.au",
    "rospotrebnadzor.ru",
    ".gosweb.gosuslugi.ru",
    ".trkcontinent.ru",
    ".gosuslugi.ru",
    ".rambler.ru",
    ".kp.ru",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{COMMERCIAL_DOMAINS, ECOMMERCE_DOMAINS, INFORMATIONAL_DOMAINS};

    #[test]
    fn exact_lists_are_disjoint() {
        let commercial: HashSet<&str> = COMMERCIAL_DOMAINS.iter().copied().collect();
        let ecommerce: HashSet<&str> = ECOMMERCE_DOMAINS.iter().copied().collect();
        let informational: HashSet<&str> = INFORMATIONAL_DOMAINS.iter().copied().collect();

        assert!(commercial.is_disjoint(&ecommerce));
        assert!(commercial.is_disjoint(&informational));
        assert!(ecommerce.is_disjoint(&informational));
    }

    #[test]
    fn entries_are_lowercase_and_trimmed() {
        for domain in COMMERCIAL_DOMAINS
            .iter()
            .chain(ECOMMERCE_DOMAINS)
            .chain(INFORMATIONAL_DOMAINS)
        {
            assert_eq!(*domain, domain.trim().to_lowercase(), "bad entry {}", domain);
        }
    }
}
